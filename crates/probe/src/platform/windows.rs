//! Windows implementation using IMM32.

use super::strategy::QueryStrategy;
use crate::layout::{ConversionFlags, LocaleCode};
use crate::provider::ImeProvider;

use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::Input::Ime::{
    ImmGetContext, ImmGetConversionStatus, ImmGetDefaultIMEWnd, ImmReleaseContext, HIMC,
    IME_CONVERSION_MODE, IME_SENTENCE_MODE,
};
use windows::Win32::UI::Input::KeyboardAndMouse::GetKeyboardLayout;
use windows::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowThreadProcessId, SendMessageTimeoutW, SMTO_ABORTIFHUNG,
};

/// How long the default IME window may take to answer `WM_IME_CONTROL`.
pub const IME_WINDOW_TIMEOUT_MS: u32 = 100;

const WM_IME_CONTROL: u32 = 0x0283;
const IMC_GETCONVERSIONMODE: usize = 0x0001;

/// Input context acquired for a foreground window.
#[derive(Debug)]
pub enum WindowsInputContext {
    /// Must be returned with `ImmReleaseContext`.
    Imm(HIMC),
    /// Borrowed from the system; nothing to release.
    ImeWindow(HWND),
}

/// Windows provider backed by the user32 and imm32 APIs.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsProvider {
    strategy: QueryStrategy,
}

impl WindowsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: QueryStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> QueryStrategy {
        self.strategy
    }
}

impl ImeProvider for WindowsProvider {
    type ContextHandle = HWND;
    type InputContextHandle = WindowsInputContext;

    fn foreground_context(&self) -> Option<HWND> {
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.is_invalid() {
            tracing::trace!("GetForegroundWindow returned null");
            return None;
        }
        Some(hwnd)
    }

    fn layout_identifier(&self, context: &HWND) -> LocaleCode {
        unsafe {
            let thread_id = GetWindowThreadProcessId(*context, None);
            if thread_id == 0 {
                tracing::trace!("GetWindowThreadProcessId failed");
                return LocaleCode::UNKNOWN;
            }
            let hkl = GetKeyboardLayout(thread_id);
            LocaleCode::from_layout_handle(hkl.0 as usize)
        }
    }

    fn acquire_input_context(&self, context: &HWND) -> Option<WindowsInputContext> {
        self.strategy
            .acquire(|| imm_context(*context), || default_ime_window(*context))
    }

    fn query_conversion_state(&self, input: &WindowsInputContext) -> Option<ConversionFlags> {
        match input {
            WindowsInputContext::Imm(himc) => {
                let mut conversion = IME_CONVERSION_MODE(0);
                let mut sentence = IME_SENTENCE_MODE(0);
                let ok = unsafe {
                    ImmGetConversionStatus(*himc, Some(&mut conversion), Some(&mut sentence))
                };
                if !ok.as_bool() {
                    tracing::debug!("ImmGetConversionStatus failed");
                    return None;
                }
                Some(ConversionFlags::from_raw(conversion.0))
            }
            WindowsInputContext::ImeWindow(ime_wnd) => {
                let mut result: usize = 0;
                let sent = unsafe {
                    SendMessageTimeoutW(
                        *ime_wnd,
                        WM_IME_CONTROL,
                        WPARAM(IMC_GETCONVERSIONMODE),
                        LPARAM(0),
                        SMTO_ABORTIFHUNG,
                        IME_WINDOW_TIMEOUT_MS,
                        Some(&mut result),
                    )
                };
                if sent.0 == 0 {
                    tracing::debug!(
                        timeout_ms = IME_WINDOW_TIMEOUT_MS,
                        "IME window did not answer IMC_GETCONVERSIONMODE"
                    );
                    return None;
                }
                Some(ConversionFlags::from_raw(result as u32))
            }
        }
    }

    fn release_input_context(&self, context: &HWND, input: WindowsInputContext) {
        if let WindowsInputContext::Imm(himc) = input {
            let ok = unsafe { ImmReleaseContext(*context, himc) };
            if !ok.as_bool() {
                tracing::warn!("ImmReleaseContext failed");
            }
        }
    }
}

fn imm_context(hwnd: HWND) -> Option<WindowsInputContext> {
    let himc = unsafe { ImmGetContext(hwnd) };
    if himc.is_invalid() {
        tracing::trace!("ImmGetContext returned null");
        return None;
    }
    Some(WindowsInputContext::Imm(himc))
}

fn default_ime_window(hwnd: HWND) -> Option<WindowsInputContext> {
    let ime_wnd = unsafe { ImmGetDefaultIMEWnd(hwnd) };
    if ime_wnd.is_invalid() {
        tracing::trace!("ImmGetDefaultIMEWnd returned null");
        return None;
    }
    Some(WindowsInputContext::ImeWindow(ime_wnd))
}

//! macOS implementation using Text Input Sources.

use crate::layout::{ConversionFlags, LocaleCode};
use crate::provider::ImeProvider;
use std::ffi::c_void;

use core_foundation::base::{CFRelease, TCFType};
use core_foundation::string::{CFString, CFStringRef};

// Native Cocoa imports for frontmost app detection
use objc::runtime::{Class, Object};
use objc::{msg_send, sel, sel_impl};

type TISInputSourceRef = *mut c_void;

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    fn TISCopyCurrentKeyboardInputSource() -> TISInputSourceRef;
    fn TISGetInputSourceProperty(source: TISInputSourceRef, key: CFStringRef) -> *const c_void;

    static kTISPropertyInputSourceID: CFStringRef;
    static kTISPropertyInputModeID: CFStringRef;
}

/// Retained `TISInputSourceRef`, released with `CFRelease` on drop.
#[derive(Debug)]
pub struct MacOSInputSource(TISInputSourceRef);

impl Drop for MacOSInputSource {
    fn drop(&mut self) {
        unsafe { CFRelease(self.0 as *const c_void) };
    }
}

/// macOS provider.
///
/// The foreground context is the frontmost application's pid. The layout is
/// Korean when the current keyboard input source is a Korean input method.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacOSProvider;

impl MacOSProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImeProvider for MacOSProvider {
    type ContextHandle = i32;
    type InputContextHandle = MacOSInputSource;

    fn foreground_context(&self) -> Option<i32> {
        frontmost_pid()
    }

    fn layout_identifier(&self, _context: &i32) -> LocaleCode {
        let Some(source) = copy_current_source() else {
            return LocaleCode::UNKNOWN;
        };
        let id = unsafe { source_property(source.0, kTISPropertyInputSourceID) };
        drop(source);

        match id {
            Some(id) if is_korean_source_id(&id) => LocaleCode::KOREAN,
            Some(id) => {
                tracing::trace!(source = %id, "non-Korean input source");
                LocaleCode::UNKNOWN
            }
            None => LocaleCode::UNKNOWN,
        }
    }

    fn acquire_input_context(&self, _context: &i32) -> Option<MacOSInputSource> {
        copy_current_source()
    }

    fn query_conversion_state(&self, input: &MacOSInputSource) -> Option<ConversionFlags> {
        let mode = unsafe {
            source_property(input.0, kTISPropertyInputModeID)
                .or_else(|| source_property(input.0, kTISPropertyInputSourceID))
        }?;

        if is_hangul_mode_id(&mode) {
            Some(ConversionFlags::HANGUL)
        } else {
            Some(ConversionFlags::empty())
        }
    }

    fn release_input_context(&self, _context: &i32, input: MacOSInputSource) {
        drop(input);
    }
}

fn copy_current_source() -> Option<MacOSInputSource> {
    let source = unsafe { TISCopyCurrentKeyboardInputSource() };
    if source.is_null() {
        tracing::trace!("TISCopyCurrentKeyboardInputSource returned null");
        return None;
    }
    Some(MacOSInputSource(source))
}

/// Read a string property. The returned CFString follows the get rule.
unsafe fn source_property(source: TISInputSourceRef, key: CFStringRef) -> Option<String> {
    let value = TISGetInputSourceProperty(source, key);
    if value.is_null() {
        return None;
    }
    Some(CFString::wrap_under_get_rule(value as CFStringRef).to_string())
}

fn is_korean_source_id(id: &str) -> bool {
    let id = id.to_lowercase();
    id.contains("korean") || id.contains("hangul")
}

fn is_hangul_mode_id(id: &str) -> bool {
    is_korean_source_id(id) && !id.to_lowercase().contains("roman")
}

/// Pid of the frontmost application via NSWorkspace.
fn frontmost_pid() -> Option<i32> {
    unsafe {
        let workspace_class = Class::get("NSWorkspace")?;

        let shared_workspace: *mut Object = msg_send![workspace_class, sharedWorkspace];
        if shared_workspace.is_null() {
            return None;
        }

        let frontmost_app: *mut Object = msg_send![shared_workspace, frontmostApplication];
        if frontmost_app.is_null() {
            return None;
        }

        let pid: i32 = msg_send![frontmost_app, processIdentifier];
        (pid > 0).then_some(pid)
    }
}

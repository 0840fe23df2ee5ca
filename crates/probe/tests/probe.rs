//! Integration tests for the probe crate.
//!
//! Uses an in-memory fake OS layer that counts every capability call.

use hanmode_probe::{
    ConversionFlags, ImeProvider, InputMode, InputModeProbe, LocaleCode, ProbeError,
    ProbeErrorKind,
};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct FakeProvider {
    focused: bool,
    layout: Option<LocaleCode>,
    context_available: bool,
    conversion: Option<ConversionFlags>,

    acquires: AtomicUsize,
    releases: AtomicUsize,
    queries: AtomicUsize,
    live_contexts: AtomicUsize,
}

impl FakeProvider {
    fn korean(conversion: Option<ConversionFlags>) -> Self {
        Self {
            focused: true,
            layout: Some(LocaleCode::KOREAN),
            context_available: true,
            conversion,
            ..Default::default()
        }
    }

    fn acquires(&self) -> usize {
        self.acquires.load(Ordering::SeqCst)
    }

    fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }

    fn assert_balanced(&self) {
        assert_eq!(self.acquires(), self.releases(), "acquire/release mismatch");
        assert_eq!(self.live_contexts.load(Ordering::SeqCst), 0);
    }
}

#[derive(Debug, PartialEq)]
struct FakeWindow(u32);

#[derive(Debug)]
struct FakeInputContext(u32);

impl ImeProvider for FakeProvider {
    type ContextHandle = FakeWindow;
    type InputContextHandle = FakeInputContext;

    fn foreground_context(&self) -> Option<FakeWindow> {
        self.focused.then_some(FakeWindow(7))
    }

    fn layout_identifier(&self, context: &FakeWindow) -> LocaleCode {
        assert_eq!(*context, FakeWindow(7));
        self.layout.unwrap_or(LocaleCode::UNKNOWN)
    }

    fn acquire_input_context(&self, context: &FakeWindow) -> Option<FakeInputContext> {
        self.acquires.fetch_add(1, Ordering::SeqCst);
        if !self.context_available {
            return None;
        }
        self.live_contexts.fetch_add(1, Ordering::SeqCst);
        Some(FakeInputContext(context.0))
    }

    fn query_conversion_state(&self, input: &FakeInputContext) -> Option<ConversionFlags> {
        assert_eq!(input.0, 7);
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.conversion
    }

    fn release_input_context(&self, context: &FakeWindow, input: FakeInputContext) {
        assert_eq!(input.0, context.0);
        self.releases.fetch_add(1, Ordering::SeqCst);
        self.live_contexts.fetch_sub(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Classification Tests
// =============================================================================

mod classification {
    use super::*;

    #[test]
    fn test_no_focus_is_non_korean() {
        let provider = FakeProvider {
            focused: false,
            layout: Some(LocaleCode::KOREAN),
            context_available: true,
            conversion: Some(ConversionFlags::HANGUL),
            ..Default::default()
        };
        let probe = InputModeProbe::new(&provider);

        assert_eq!(probe.detect(), InputMode::NonKorean);
        assert_eq!(probe.inspect(), Err(ProbeError::NoFocusContext));
        assert_eq!(provider.acquires(), 0);
    }

    #[test]
    fn test_non_korean_layout_skips_context_acquisition() {
        let provider = FakeProvider {
            focused: true,
            layout: Some(LocaleCode::ENGLISH_US),
            context_available: true,
            conversion: Some(ConversionFlags::HANGUL),
            ..Default::default()
        };
        let probe = InputModeProbe::new(&provider);

        assert_eq!(probe.detect(), InputMode::NonKorean);
        assert_eq!(
            probe.inspect(),
            Err(ProbeError::UnsupportedLayout {
                layout: LocaleCode::ENGLISH_US
            })
        );
        assert_eq!(provider.acquires(), 0, "acquire_input_context must not be called");
    }

    #[test]
    fn test_korean_layout_with_hangul_flag_is_korean() {
        let provider = FakeProvider::korean(Some(ConversionFlags::HANGUL));
        assert_eq!(InputModeProbe::new(&provider).detect(), InputMode::Korean);
    }

    #[test]
    fn test_korean_layout_with_extra_flags_is_korean() {
        let provider =
            FakeProvider::korean(Some(ConversionFlags::HANGUL | ConversionFlags::FULLSHAPE));
        assert_eq!(InputModeProbe::new(&provider).detect(), InputMode::Korean);
    }

    #[test]
    fn test_korean_layout_without_hangul_flag_is_non_korean() {
        let provider = FakeProvider::korean(Some(ConversionFlags::empty()));
        let probe = InputModeProbe::new(&provider);

        assert_eq!(probe.detect(), InputMode::NonKorean);
        assert_eq!(probe.inspect(), Ok(ConversionFlags::empty()));
    }

    #[test]
    fn test_acquisition_failure_is_undetermined() {
        let provider = FakeProvider {
            context_available: false,
            ..FakeProvider::korean(Some(ConversionFlags::HANGUL))
        };
        let probe = InputModeProbe::new(&provider);

        assert_eq!(probe.detect(), InputMode::Undetermined);
        assert_eq!(probe.inspect(), Err(ProbeError::ContextAcquisitionFailed));
    }

    #[test]
    fn test_query_failure_is_undetermined() {
        let provider = FakeProvider::korean(None);
        let probe = InputModeProbe::new(&provider);

        assert_eq!(probe.detect(), InputMode::Undetermined);
        assert_eq!(probe.inspect(), Err(ProbeError::StateQueryFailed));
    }
}

// =============================================================================
// Resource Symmetry Tests
// =============================================================================

mod resources {
    use super::*;

    #[test]
    fn test_release_after_success() {
        let provider = FakeProvider::korean(Some(ConversionFlags::HANGUL));
        InputModeProbe::new(&provider).detect();

        assert_eq!(provider.acquires(), 1);
        provider.assert_balanced();
    }

    #[test]
    fn test_release_after_query_failure() {
        let provider = FakeProvider::korean(None);
        InputModeProbe::new(&provider).detect();

        assert_eq!(provider.acquires(), 1);
        assert_eq!(provider.queries.load(Ordering::SeqCst), 1);
        provider.assert_balanced();
    }

    #[test]
    fn test_no_release_without_acquisition() {
        let provider = FakeProvider {
            context_available: false,
            ..FakeProvider::korean(Some(ConversionFlags::HANGUL))
        };
        InputModeProbe::new(&provider).detect();

        // The failed attempt is counted but nothing was handed out.
        assert_eq!(provider.acquires(), 1);
        assert_eq!(provider.releases(), 0);
        assert_eq!(provider.live_contexts.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_balanced_across_every_entry_point() {
        let provider = FakeProvider::korean(Some(ConversionFlags::HANGUL));
        let probe = InputModeProbe::new(&provider);

        probe.detect();
        provider.assert_balanced();
        let _ = probe.inspect();
        provider.assert_balanced();
        probe.snapshot();
        provider.assert_balanced();

        assert_eq!(provider.acquires(), 3);
    }

    #[test]
    fn test_balanced_under_concurrent_callers() {
        let provider = FakeProvider::korean(Some(ConversionFlags::HANGUL));
        let probe = InputModeProbe::new(&provider);

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        assert_eq!(probe.detect(), InputMode::Korean);
                    }
                });
            }
        });

        assert_eq!(provider.acquires(), 200);
        provider.assert_balanced();
    }
}

// =============================================================================
// Idempotence and Snapshot Tests
// =============================================================================

mod sampling {
    use super::*;

    #[test]
    fn test_repeated_calls_agree() {
        for conversion in [
            Some(ConversionFlags::HANGUL),
            Some(ConversionFlags::empty()),
            None,
        ] {
            let provider = FakeProvider::korean(conversion);
            let probe = InputModeProbe::new(&provider);

            let first = probe.detect();
            for _ in 0..10 {
                assert_eq!(probe.detect(), first);
            }
        }
    }

    #[test]
    fn test_snapshot_matches_detect() {
        let providers = [
            FakeProvider::default(),
            FakeProvider::korean(Some(ConversionFlags::HANGUL)),
            FakeProvider::korean(Some(ConversionFlags::empty())),
            FakeProvider::korean(None),
            FakeProvider {
                context_available: false,
                ..FakeProvider::korean(None)
            },
        ];

        for provider in &providers {
            let probe = InputModeProbe::new(provider);
            assert_eq!(probe.snapshot().mode, probe.detect());
        }
    }

    #[test]
    fn test_snapshot_records_reason() {
        let provider = FakeProvider {
            focused: true,
            layout: Some(LocaleCode::ENGLISH_US),
            ..Default::default()
        };
        let snapshot = InputModeProbe::new(&provider).snapshot();

        assert_eq!(snapshot.mode, InputMode::NonKorean);
        assert_eq!(snapshot.layout, Some(LocaleCode::ENGLISH_US));
        assert_eq!(snapshot.conversion, None);
        assert_eq!(snapshot.reason, Some(ProbeErrorKind::UnsupportedLayout));
    }

    #[test]
    fn test_snapshot_serializes() {
        let provider = FakeProvider::korean(Some(ConversionFlags::HANGUL));
        let snapshot = InputModeProbe::new(&provider).snapshot();

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["mode"], "korean");
        assert_eq!(json["layout"], 0x0412);
        assert_eq!(json["conversion"], "HANGUL");
        assert!(json["reason"].is_null());
    }
}

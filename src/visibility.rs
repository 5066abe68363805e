//! The visibility controller: one owned state object deciding which
//! status-bar buttons are shown for the current debug status.
//!
//! All mutable state lives here. The adapter feeds transitions in; every
//! recompute issues exactly one show-or-hide call per button, so the widget
//! row is always a pure function of `(status, dart_like, enabled)`.

use std::fmt;

use crate::buttons::ButtonId;
use crate::host::{ButtonHandle, WidgetHost};
use crate::prefs::BarPrefs;
use crate::protocol::Trigger;
use crate::status::DebugStatus;

/// Small copyable set of button ids.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonSet(u8);

impl ButtonSet {
    pub const EMPTY: ButtonSet = ButtonSet(0);

    #[must_use]
    pub fn with(self, id: ButtonId) -> ButtonSet {
        ButtonSet(self.0 | (1 << id.index()))
    }

    #[must_use]
    pub fn contains(self, id: ButtonId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    #[must_use]
    pub fn intersect(self, other: ButtonSet) -> ButtonSet {
        ButtonSet(self.0 & other.0)
    }

    pub fn iter(self) -> impl Iterator<Item = ButtonId> {
        ButtonId::ALL.into_iter().filter(move |id| self.contains(*id))
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ButtonSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The visible set for a status/project pair.
///
/// At most one of {Start, Starting} and at most one of {Continue, Pause} is
/// ever in the result; HotReload only appears for dart-like projects while a
/// debuggee is live.
#[must_use]
pub fn visible_buttons(status: DebugStatus, dart_like: bool) -> ButtonSet {
    let mut set = match status {
        DebugStatus::NotStarted => ButtonSet::EMPTY.with(ButtonId::Start),
        DebugStatus::Starting => ButtonSet::EMPTY.with(ButtonId::Starting),
        DebugStatus::Paused => ButtonSet::EMPTY
            .with(ButtonId::Continue)
            .with(ButtonId::Restart)
            .with(ButtonId::Stop),
        DebugStatus::Running => ButtonSet::EMPTY
            .with(ButtonId::Pause)
            .with(ButtonId::Restart)
            .with(ButtonId::Stop),
    };
    if dart_like && status.is_active() {
        set = set.with(ButtonId::HotReload);
    }
    set
}

/// Owns the debug status, the project-kind flag, and every widget handle.
pub struct VisibilityController<H: ButtonHandle> {
    status: DebugStatus,
    dart_like: bool,
    enabled: ButtonSet,
    handles: [H; 7],
}

impl<H: ButtonHandle> VisibilityController<H> {
    /// Create every button widget up front and show the idle row.
    pub fn new<W>(host: &mut W, prefs: &BarPrefs) -> Self
    where
        W: WidgetHost<Handle = H>,
    {
        let handles = ButtonId::ALL.map(|id| host.create_button(&id.init(prefs)));
        let mut controller = Self {
            status: DebugStatus::NotStarted,
            dart_like: false,
            enabled: prefs.enabled_set(),
            handles,
        };
        controller.recompute();
        controller
    }

    #[must_use]
    pub fn status(&self) -> DebugStatus {
        self.status
    }

    #[must_use]
    pub fn dart_like(&self) -> bool {
        self.dart_like
    }

    /// The set currently shown: the visibility rule intersected with the
    /// user's enabled buttons.
    #[must_use]
    pub fn visible(&self) -> ButtonSet {
        visible_buttons(self.status, self.dart_like).intersect(self.enabled)
    }

    /// Re-issue show/hide for every button from current state. Idempotent:
    /// repeated calls with unchanged inputs produce identical calls.
    pub fn recompute(&mut self) {
        let visible = self.visible();
        for id in ButtonId::ALL {
            let handle = &mut self.handles[id.index()];
            if visible.contains(id) {
                handle.show();
            } else {
                handle.hide();
            }
        }
    }

    /// A session launched. The project-kind flag resets until the probe for
    /// this session lands.
    pub fn session_started(&mut self) {
        self.status = DebugStatus::Starting;
        self.dart_like = false;
        self.recompute();
    }

    /// The session ended, from whatever state it was in.
    pub fn session_terminated(&mut self) {
        self.status = DebugStatus::NotStarted;
        self.recompute();
    }

    /// Apply a decoded protocol trigger; invalid triggers change nothing and
    /// issue no widget calls.
    pub fn apply_trigger(&mut self, trigger: Trigger) {
        let next = self.status.apply(trigger);
        if next != self.status {
            self.status = next;
            self.recompute();
        }
    }

    /// Record the project-kind probe result; recomputes only on change.
    pub fn set_dart_like(&mut self, dart_like: bool) {
        if self.dart_like != dart_like {
            self.dart_like = dart_like;
            self.recompute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeHost;
    use rstest::rstest;

    fn controller(prefs: &BarPrefs) -> (VisibilityController<crate::test_support::FakeButton>, FakeHost)
    {
        let mut host = FakeHost::default();
        let controller = VisibilityController::new(&mut host, prefs);
        (controller, host)
    }

    #[rstest]
    #[case(DebugStatus::NotStarted, false, &[ButtonId::Start])]
    #[case(DebugStatus::NotStarted, true, &[ButtonId::Start])]
    #[case(DebugStatus::Starting, false, &[ButtonId::Starting])]
    #[case(DebugStatus::Starting, true, &[ButtonId::Starting])]
    #[case(
        DebugStatus::Paused,
        false,
        &[ButtonId::Continue, ButtonId::Restart, ButtonId::Stop]
    )]
    #[case(
        DebugStatus::Paused,
        true,
        &[ButtonId::Continue, ButtonId::HotReload, ButtonId::Restart, ButtonId::Stop]
    )]
    #[case(
        DebugStatus::Running,
        false,
        &[ButtonId::Pause, ButtonId::Restart, ButtonId::Stop]
    )]
    #[case(
        DebugStatus::Running,
        true,
        &[ButtonId::Pause, ButtonId::HotReload, ButtonId::Restart, ButtonId::Stop]
    )]
    fn visible_set_matches_rule_exactly(
        #[case] status: DebugStatus,
        #[case] dart_like: bool,
        #[case] expected: &[ButtonId],
    ) {
        let set = visible_buttons(status, dart_like);
        assert_eq!(set.len(), expected.len(), "{set:?}");
        for id in expected {
            assert!(set.contains(*id), "{set:?} missing {id:?}");
        }
    }

    #[test]
    fn start_starting_and_continue_pause_are_mutually_exclusive() {
        for status in DebugStatus::ALL {
            for dart_like in [false, true] {
                let set = visible_buttons(status, dart_like);
                let launch = usize::from(set.contains(ButtonId::Start))
                    + usize::from(set.contains(ButtonId::Starting));
                let flow = usize::from(set.contains(ButtonId::Continue))
                    + usize::from(set.contains(ButtonId::Pause));
                assert!(launch <= 1, "{status:?}/{dart_like}: {set:?}");
                assert!(flow <= 1, "{status:?}/{dart_like}: {set:?}");
            }
        }
    }

    #[test]
    fn activation_shows_only_the_start_button() {
        let prefs = BarPrefs::default();
        let (controller, host) = controller(&prefs);
        assert_eq!(controller.status(), DebugStatus::NotStarted);
        assert_eq!(host.shown(), vec![ButtonId::Start]);
        // One widget per button, created exactly once.
        assert_eq!(host.created().len(), ButtonId::ALL.len());
    }

    #[test]
    fn recompute_issues_one_call_per_button_each_run() {
        let prefs = BarPrefs::default();
        let (mut controller, host) = controller(&prefs);
        let calls_after_new = host.call_count();
        assert_eq!(calls_after_new, ButtonId::ALL.len());
        controller.recompute();
        assert_eq!(host.call_count(), calls_after_new + ButtonId::ALL.len());
        // Identical inputs, identical row.
        assert_eq!(host.shown(), vec![ButtonId::Start]);
    }

    #[test]
    fn invalid_trigger_issues_no_widget_calls() {
        let prefs = BarPrefs::default();
        let (mut controller, host) = controller(&prefs);
        controller.session_started();
        let calls = host.call_count();
        controller.apply_trigger(Trigger::ContinueRequested);
        controller.apply_trigger(Trigger::Unknown);
        assert_eq!(host.call_count(), calls);
        assert_eq!(controller.status(), DebugStatus::Starting);
    }

    #[test]
    fn terminate_returns_to_not_started_from_any_state() {
        let prefs = BarPrefs::default();
        for warmup in [
            vec![],
            vec![Trigger::ConfigurationDone],
            vec![Trigger::ConfigurationDone, Trigger::Stopped],
        ] {
            let (mut controller, host) = controller(&prefs);
            controller.session_started();
            for trigger in warmup {
                controller.apply_trigger(trigger);
            }
            controller.session_terminated();
            assert_eq!(controller.status(), DebugStatus::NotStarted);
            assert_eq!(host.shown(), vec![ButtonId::Start]);
        }
    }

    #[test]
    fn dart_flag_resets_on_each_session_start() {
        let prefs = BarPrefs::default();
        let (mut controller, _host) = controller(&prefs);
        controller.session_started();
        controller.set_dart_like(true);
        controller.session_terminated();
        controller.session_started();
        assert!(!controller.dart_like());
    }

    #[test]
    fn disabled_buttons_never_show() {
        let prefs = BarPrefs {
            buttons: vec![ButtonId::Start, ButtonId::Stop],
            ..BarPrefs::default()
        };
        let (mut controller, host) = controller(&prefs);
        controller.session_started();
        controller.apply_trigger(Trigger::ConfigurationDone);
        // Running would show Pause/Restart/Stop; only Stop survives prefs.
        assert_eq!(host.shown(), vec![ButtonId::Stop]);
    }

    #[test]
    fn set_dart_like_recomputes_only_on_change() {
        let prefs = BarPrefs::default();
        let (mut controller, host) = controller(&prefs);
        controller.session_started();
        controller.apply_trigger(Trigger::ConfigurationDone);
        let calls = host.call_count();
        controller.set_dart_like(false);
        assert_eq!(host.call_count(), calls);
        controller.set_dart_like(true);
        assert!(host.call_count() > calls);
        assert!(host.shown().contains(&ButtonId::HotReload));
    }
}

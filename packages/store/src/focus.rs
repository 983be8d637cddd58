//! # Focus mode: the pomodoro state machine
//!
//! [`FocusTimer`] alternates between a 25 minute work interval and a 5 minute
//! break. Each interval is either running or paused, and nothing moves unless
//! something calls [`FocusTimer::tick`] once per second while running.
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`toggle`](FocusTimer::toggle) | running ⇄ paused, nothing else changes |
//! | [`tick`](FocusTimer::tick) | one second off the clock; at zero the mode flips and the timer pauses |
//! | [`reset`](FocusTimer::reset) | paused, full duration of the current mode, sessions kept |
//! | [`reset_all`](FocusTimer::reset_all) | back to the initial state, sessions cleared |
//!
//! The zero instant is never observable: the tick that reaches it performs
//! the mode switch, so `0 < time_left <= total_time()` always holds.
//!
//! ## Driving the timer
//!
//! [`tick_loop`] builds the repeating future that feeds ticks. It is
//! abortable: dropping the returned [`TickGuard`] stops it, so a widget that
//! holds the guard cannot leak a running interval after it unmounts. The
//! loop is runtime-agnostic; the caller supplies the sleep function
//! (`gloo-timers` in the browser, `tokio::time` natively).

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

pub const WORK_TIME: u32 = 25 * 60;
pub const BREAK_TIME: u32 = 5 * 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    Working,
    OnBreak,
}

/// Emitted by the tick that ends an interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    SessionCompleted,
    BreakFinished,
}

impl FocusEvent {
    pub fn message(&self) -> &'static str {
        match self {
            FocusEvent::SessionCompleted => "Session complete! Time for a break 🎉",
            FocusEvent::BreakFinished => "Break is over! Ready to study again?",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusTimer {
    time_left: u32,
    running: bool,
    mode: FocusMode,
    sessions: u32,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self {
            time_left: WORK_TIME,
            running: false,
            mode: FocusMode::Working,
            sessions: 0,
        }
    }
}

impl FocusTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_break(&self) -> bool {
        self.mode == FocusMode::OnBreak
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Full duration of the current mode.
    pub fn total_time(&self) -> u32 {
        match self.mode {
            FocusMode::Working => WORK_TIME,
            FocusMode::OnBreak => BREAK_TIME,
        }
    }

    /// Elapsed share of the current interval, 0.0 to 100.0.
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.total_time());
        (total - f64::from(self.time_left)) / total * 100.0
    }

    /// `MM:SS` of the remaining time.
    pub fn format_time(&self) -> String {
        format_clock(self.time_left)
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    pub fn tick(&mut self) -> Option<FocusEvent> {
        if !self.running {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return None;
        }
        self.running = false;
        Some(match self.mode {
            FocusMode::Working => {
                self.sessions += 1;
                self.mode = FocusMode::OnBreak;
                self.time_left = BREAK_TIME;
                FocusEvent::SessionCompleted
            }
            FocusMode::OnBreak => {
                self.mode = FocusMode::Working;
                self.time_left = WORK_TIME;
                FocusEvent::BreakFinished
            }
        })
    }

    pub fn reset(&mut self) {
        self.running = false;
        self.time_left = self.total_time();
    }

    pub fn reset_all(&mut self) {
        *self = Self::default();
    }
}

/// Format seconds as `MM:SS`.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Open/minimized state of the floating focus widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusPanel {
    pub open: bool,
    pub minimized: bool,
}

impl FocusPanel {
    pub fn open(&mut self) {
        self.open = true;
        self.minimized = false;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.minimized = false;
    }

    pub fn minimize(&mut self) {
        self.minimized = true;
    }

    pub fn expand(&mut self) {
        self.minimized = false;
    }
}

/// Stops the associated tick loop when dropped.
#[derive(Debug)]
pub struct TickGuard {
    handle: AbortHandle,
}

impl TickGuard {
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.handle.is_aborted()
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Build a loop that awaits `sleep()` and then calls `on_tick`, until
/// `on_tick` returns `false` or the guard is dropped.
pub fn tick_loop<S, F, T>(mut sleep: S, mut on_tick: T) -> (impl Future<Output = ()>, TickGuard)
where
    S: FnMut() -> F,
    F: Future<Output = ()>,
    T: FnMut() -> bool,
{
    let (handle, registration) = AbortHandle::new_pair();
    let ticks = Abortable::new(
        async move {
            loop {
                sleep().await;
                if !on_tick() {
                    break;
                }
            }
        },
        registration,
    );
    let run = async move {
        // Err(Aborted) just means the owner went away
        let _ = ticks.await;
    };
    (run, TickGuard { handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[test]
    fn test_initial_state() {
        let timer = FocusTimer::new();
        assert_eq!(timer.time_left(), WORK_TIME);
        assert!(!timer.is_running());
        assert!(!timer.is_break());
        assert_eq!(timer.sessions(), 0);
        assert_eq!(timer.format_time(), "25:00");
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_full_work_interval_switches_to_break() {
        let mut timer = FocusTimer::new();
        timer.toggle();

        let mut events = Vec::new();
        for _ in 0..1500 {
            assert!(timer.time_left() > 0 && timer.time_left() <= timer.total_time());
            if let Some(event) = timer.tick() {
                events.push(event);
            }
        }

        assert_eq!(events, vec![FocusEvent::SessionCompleted]);
        assert!(timer.is_break());
        assert!(!timer.is_running());
        assert_eq!(timer.time_left(), BREAK_TIME);
        assert_eq!(timer.format_time(), "05:00");
        assert_eq!(timer.sessions(), 1);
    }

    #[test]
    fn test_break_returns_to_work_without_counting() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        for _ in 0..WORK_TIME {
            timer.tick();
        }
        timer.toggle();
        let mut last = None;
        for _ in 0..BREAK_TIME {
            last = timer.tick().or(last);
        }
        assert_eq!(last, Some(FocusEvent::BreakFinished));
        assert!(!timer.is_break());
        assert_eq!(timer.time_left(), WORK_TIME);
        assert_eq!(timer.sessions(), 1);
    }

    #[test]
    fn test_paused_ticks_do_nothing() {
        let mut timer = FocusTimer::new();
        assert_eq!(timer.tick(), None);
        assert_eq!(timer.time_left(), WORK_TIME);
    }

    #[test]
    fn test_toggle_keeps_mode_and_sessions() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        for _ in 0..WORK_TIME {
            timer.tick();
        }
        let before = (timer.is_break(), timer.sessions(), timer.time_left());
        timer.toggle();
        timer.toggle();
        assert_eq!((timer.is_break(), timer.sessions(), timer.time_left()), before);
    }

    #[test]
    fn test_reset_keeps_sessions() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        for _ in 0..WORK_TIME {
            timer.tick();
        }
        timer.toggle();
        for _ in 0..30 {
            timer.tick();
        }
        timer.reset();
        assert!(!timer.is_running());
        assert!(timer.is_break());
        assert_eq!(timer.time_left(), BREAK_TIME);
        assert_eq!(timer.sessions(), 1);

        timer.reset_all();
        assert_eq!(timer, FocusTimer::new());
    }

    #[test]
    fn test_progress_and_clock() {
        let mut timer = FocusTimer::new();
        timer.toggle();
        for _ in 0..(WORK_TIME / 2) {
            timer.tick();
        }
        assert_eq!(timer.progress(), 50.0);
        assert_eq!(timer.format_time(), "12:30");
        assert_eq!(format_clock(59), "00:59");
    }

    #[test]
    fn test_panel_state() {
        let mut panel = FocusPanel::default();
        panel.open();
        panel.minimize();
        assert!(panel.open && panel.minimized);
        panel.expand();
        assert!(!panel.minimized);
        panel.minimize();
        panel.close();
        assert_eq!(panel, FocusPanel::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_guard_stops_ticks() {
        let timer = Rc::new(RefCell::new(FocusTimer::new()));
        timer.borrow_mut().toggle();

        let ticking = timer.clone();
        let (run, guard) = tick_loop(
            || tokio::time::sleep(Duration::from_secs(1)),
            move || {
                let mut timer = ticking.borrow_mut();
                timer.tick();
                timer.is_running()
            },
        );
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let task = tokio::task::spawn_local(run);

                tokio::time::sleep(Duration::from_millis(3500)).await;
                assert_eq!(timer.borrow().time_left(), WORK_TIME - 3);

                drop(guard);
                tokio::time::sleep(Duration::from_secs(10)).await;
                assert_eq!(timer.borrow().time_left(), WORK_TIME - 3);
                assert!(task.is_finished());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_ends_when_timer_pauses() {
        let count = Rc::new(RefCell::new(0));
        let counter = count.clone();
        let (run, guard) = tick_loop(
            || tokio::time::sleep(Duration::from_secs(1)),
            move || {
                *counter.borrow_mut() += 1;
                *counter.borrow() < 3
            },
        );
        run.await;
        assert_eq!(*count.borrow(), 3);
        assert!(!guard.is_stopped());
    }
}

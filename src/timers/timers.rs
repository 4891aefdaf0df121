// The clock backend is fixed at compile time.  std::time::Instant reads
// QueryPerformanceCounter on windows, the timebase-normalised
// mach_absolute_time on macOS and CLOCK_MONOTONIC on linux.  There is
// no std clock on wasm, so web_time supplies one with the same API.
cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        use web_time::Instant;
    } else {
        use std::time::Instant;
    }
}

/// Handle for a single monotonic time measurement.
///
/// A `Timer` stores only its start instant.  [`elapsed`](Timer::elapsed)
/// never resets that start point, so it can be read any number of times
/// after one [`start`](Timer::start) to give a running total.
///
/// ```
/// use qpkit::timers::Timer;
///
/// let mut timer = Timer::new();
/// timer.start();
/// let t1 = timer.elapsed();
/// let t2 = timer.elapsed();
/// assert!(t2 >= t1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// A timer started at the current instant
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restarts the timer at the current instant
    pub fn start(&mut self) {
        self.start = Instant::now();
    }

    /// Seconds since the last call to [`start`](Timer::start).
    ///
    /// Never negative.  A clock that appears to run backwards reads as zero.
    pub fn elapsed(&self) -> f64 {
        Instant::now()
            .saturating_duration_since(self.start)
            .as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// Solver phases that are timed separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// problem setup and first factorization
    Setup,
    /// data or settings updates between solves
    Update,
    /// iterations of the main solve loop
    Solve,
    /// solution polishing
    Polish,
}

/// Accumulated seconds spent in each [`Phase`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimingInfo {
    pub setup_time: f64,
    pub update_time: f64,
    pub solve_time: f64,
    pub polish_time: f64,
}

impl TimingInfo {
    fn total_mut(&mut self, phase: Phase) -> &mut f64 {
        match phase {
            Phase::Setup => &mut self.setup_time,
            Phase::Update => &mut self.update_time,
            Phase::Solve => &mut self.solve_time,
            Phase::Polish => &mut self.polish_time,
        }
    }
}

/// Phase timing for a solver that is set up once and then solved
/// (and possibly updated) many times.
///
/// One [`Timer`] is shared by all phases, so phases must not overlap.
#[derive(Debug, Clone)]
pub struct PhaseTimers {
    timer: Timer,
    active: Option<Phase>,
    info: TimingInfo,
    first_run: bool,
}

impl Default for PhaseTimers {
    fn default() -> Self {
        Self {
            timer: Timer::new(),
            active: None,
            info: TimingInfo::default(),
            first_run: true,
        }
    }
}

impl PhaseTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timing `phase`.
    ///
    /// # Panics
    /// Panics if another phase is still being timed.
    pub fn start(&mut self, phase: Phase) {
        //phases share one timer and may not nest
        assert!(
            self.active.is_none(),
            "cannot start {:?} while {:?} is active",
            phase,
            self.active
        );
        self.active = Some(phase);
        self.timer.start();
    }

    /// Stops timing `phase` and adds its elapsed time to the phase total.
    ///
    /// # Panics
    /// Panics if `phase` is not the phase currently being timed.
    pub fn stop(&mut self, phase: Phase) {
        assert_eq!(self.active, Some(phase));
        *self.info.total_mut(phase) += self.timer.elapsed();
        self.active = None;
    }

    /// Seconds spent so far in the phase currently being timed
    pub fn current_elapsed(&self) -> Option<f64> {
        self.active.map(|_| self.timer.elapsed())
    }

    /// Accumulated times for every phase
    pub fn times(&self) -> TimingInfo {
        self.info
    }

    /// True until [`finish_run`](PhaseTimers::finish_run) is first called
    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    /// Total run time of the current solve.
    ///
    /// Setup time counts toward the first run only.  Every later run
    /// counts update time instead.
    pub fn run_time(&self) -> f64 {
        let t = &self.info;
        let prefix = if self.first_run {
            t.setup_time
        } else {
            t.update_time
        };
        prefix + t.solve_time + t.polish_time
    }

    /// Marks the end of a solve.  Later runs no longer include setup time.
    pub fn finish_run(&mut self) {
        self.first_run = false;
    }

    /// Clears the per-solve totals ahead of a new solve.  Setup time is kept.
    pub fn reset_run(&mut self) {
        self.info.update_time = 0.0;
        self.info.solve_time = 0.0;
        self.info.polish_time = 0.0;
    }
}

/// Times a block of statements as one [`Phase`](crate::timers::Phase).
///
/// ```
/// use qpkit::{timeit, timers::{Phase, PhaseTimers}};
///
/// let mut timers = PhaseTimers::new();
/// timeit! {timers => Phase::Setup;
///     let x = 1 + 1;
/// }
/// assert!(timers.times().setup_time >= 0.0);
/// ```
#[macro_export]
macro_rules! timeit {
    ($timers:ident => $phase:expr; $($tt:tt)+) => {
        $timers.start($phase);
        $(
            $tt
        )+
        $timers.stop($phase);
    }
}

#[test]
fn test_phase_timers_accumulate() {
    let mut timers = PhaseTimers::new();
    assert_eq!(timers.current_elapsed(), None);

    timeit! {timers => Phase::Solve;
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    let first = timers.times().solve_time;
    assert!(first >= 0.002);

    timeit! {timers => Phase::Solve;
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    assert!(timers.times().solve_time >= first + 0.002);
    assert_eq!(timers.times().polish_time, 0.0);
}

#[test]
#[should_panic]
fn test_phase_timers_no_overlap() {
    let mut timers = PhaseTimers::new();
    timers.start(Phase::Setup);
    timers.start(Phase::Solve);
}

//! Slide navigation, the auto-advance ticker and the slide fade.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, SyncSender, TrySendError};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::page::{Page, Property, Region, StyleValue};
use crate::theme::ThemeSynchronizer;

/// Label shown while auto-advance is idle.
pub const START_LABEL: &str = "Start Auto Slideshow";
/// Label shown while auto-advance is running.
pub const STOP_LABEL: &str = "Stop Auto Slideshow";

const FADE_TRANSITION: &str = "opacity 0.3s ease";

/// Reasons a slideshow cannot be built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SlideshowError {
    #[error("a slideshow needs at least one slide")]
    Empty,
    #[error("{slides} slides but {schemes} color schemes")]
    SchemeMismatch { slides: usize, schemes: usize },
}

/// Timing knobs for navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideshowTiming {
    /// Auto-advance period.
    pub interval: Duration,
    /// Delay before a faded-out slide fades back in.
    pub fade_delay: Duration,
}

impl Default for SlideshowTiming {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(3000),
            fade_delay: Duration::from_millis(150),
        }
    }
}

/// Auto-advance state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AutoAdvance {
    Idle,
    Running,
}

/// Command messages sent to the ticker thread.
#[derive(Debug, Clone, Copy)]
enum TimerCommand {
    Stop,
}

/// Handle to a background thread that emits one tick per period.
///
/// Ticks are only delivered; the owner decides what they do. At most one
/// undrained tick is buffered, so a stalled owner never builds a backlog.
/// Stopping (or dropping) the handle joins the thread, after which no tick
/// is sent.
#[derive(Debug)]
pub struct AutoAdvanceTimer {
    cmd_tx: Sender<TimerCommand>,
    tick_rx: Receiver<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl AutoAdvanceTimer {
    /// Spawn the ticker.
    pub fn start(period: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (tick_tx, tick_rx) = mpsc::sync_channel(1);
        let handle = thread::spawn(move || run_ticker(period, cmd_rx, tick_tx));
        Self {
            cmd_tx,
            tick_rx,
            join: Some(handle),
        }
    }

    /// Number of ticks delivered since the last drain.
    pub fn drain_ticks(&self) -> usize {
        self.tick_rx.try_iter().count()
    }

    /// Whether the ticker thread is still alive.
    pub fn is_active(&self) -> bool {
        self.join
            .as_ref()
            .is_some_and(|join| !join.is_finished())
    }

    /// Stop the ticker and wait for its thread to exit.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(join) = self.join.take() {
            let _ = self.cmd_tx.send(TimerCommand::Stop);
            let _ = join.join();
        }
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Ticker loop: wait out each period unless a stop arrives first.
fn run_ticker(period: Duration, cmd_rx: Receiver<TimerCommand>, tick_tx: SyncSender<()>) {
    let mut deadline = Instant::now() + period;
    loop {
        let wait = deadline.saturating_duration_since(Instant::now());
        match cmd_rx.recv_timeout(wait) {
            Ok(TimerCommand::Stop) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                match tick_tx.try_send(()) {
                    Ok(()) | Err(TrySendError::Full(())) => {}
                    Err(TrySendError::Disconnected(())) => break,
                }
                deadline += period;
            }
        }
    }
}

/// Opacity fade on an image region: out at once, back in after a delay.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    region: Region,
    delay: Duration,
    until: Option<Instant>,
}

impl Fade {
    pub fn new(region: Region, delay: Duration) -> Self {
        Self {
            region,
            delay,
            until: None,
        }
    }

    /// Hide the region now and schedule the fade-in. Restarting an active
    /// fade pushes its deadline back.
    pub fn start<P: Page + ?Sized>(&mut self, page: &mut P, now: Instant) {
        page.set_style(self.region, Property::Transition, StyleValue::Transition(FADE_TRANSITION));
        page.set_style(self.region, Property::Opacity, StyleValue::Opacity(0.0));
        self.until = Some(now + self.delay);
    }

    /// Restore full opacity once the deadline has passed. Returns whether
    /// the fade finished on this call.
    pub fn finish<P: Page + ?Sized>(&mut self, page: &mut P, now: Instant) -> bool {
        match self.until {
            Some(until) if now >= until => {
                page.set_style(self.region, Property::Opacity, StyleValue::Opacity(1.0));
                self.until = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.until.is_some()
    }
}

/// The slideshow: current position, auto-advance and theme sync.
#[derive(Debug)]
pub struct Slideshow {
    slides: Vec<String>,
    current: usize,
    timer: Option<AutoAdvanceTimer>,
    fade: Fade,
    theme: ThemeSynchronizer,
    timing: SlideshowTiming,
}

impl Slideshow {
    /// Build a slideshow over `slides`, index-aligned with the theme's
    /// color schemes.
    pub fn new(
        slides: Vec<String>,
        theme: ThemeSynchronizer,
        timing: SlideshowTiming,
    ) -> Result<Self, SlideshowError> {
        if slides.is_empty() {
            return Err(SlideshowError::Empty);
        }
        if theme.schemes().len() != slides.len() {
            return Err(SlideshowError::SchemeMismatch {
                slides: slides.len(),
                schemes: theme.schemes().len(),
            });
        }
        Ok(Self {
            slides,
            current: 0,
            timer: None,
            fade: Fade::new(Region::SlideImage, timing.fade_delay),
            theme,
            timing,
        })
    }

    /// Write the initial page state for slide 0.
    pub fn init<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.current = 0;
        page.set_image(Region::SlideImage, &self.slides[0]);
        self.write_counter(page);
        page.set_text(Region::AutoAdvanceButton, START_LABEL);
        self.theme.apply_theme(page, 0);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &str {
        &self.slides[self.current]
    }

    pub fn slides(&self) -> &[String] {
        &self.slides
    }

    pub fn theme(&self) -> &ThemeSynchronizer {
        &self.theme
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        if self.timer.is_some() {
            AutoAdvance::Running
        } else {
            AutoAdvance::Idle
        }
    }

    /// Whether a fade-in is still pending.
    pub fn is_fading(&self) -> bool {
        self.fade.is_active()
    }

    /// Show slide `index`, wrapping any integer into range.
    pub fn go_to<P: Page + ?Sized>(&mut self, page: &mut P, index: i64) {
        self.current = wrap_index(index, self.slides.len());
        log::debug!("showing slide {} of {}", self.current + 1, self.slides.len());

        page.set_image(Region::SlideImage, &self.slides[self.current]);
        self.fade.start(page, Instant::now());

        self.write_counter(page);
        self.theme.apply_theme(page, self.current);
    }

    pub fn next<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.go_to(page, self.current as i64 + 1);
    }

    pub fn prev<P: Page + ?Sized>(&mut self, page: &mut P) {
        self.go_to(page, self.current as i64 - 1);
    }

    /// Start auto-advance when idle, stop it when running.
    pub fn toggle_auto_advance<P: Page + ?Sized>(&mut self, page: &mut P) -> AutoAdvance {
        match self.timer.take() {
            Some(timer) => {
                timer.stop();
                page.set_text(Region::AutoAdvanceButton, START_LABEL);
                log::info!("auto-advance stopped");
            }
            None => {
                self.timer = Some(AutoAdvanceTimer::start(self.timing.interval));
                page.set_text(Region::AutoAdvanceButton, STOP_LABEL);
                log::info!("auto-advance every {:?}", self.timing.interval);
            }
        }
        self.auto_advance()
    }

    /// Advance once if the timer fired since the last poll, then finish an
    /// elapsed fade. Ticks missed while the owner was not polling collapse
    /// into that single step.
    pub fn poll<P: Page + ?Sized>(&mut self, page: &mut P, now: Instant) {
        let fired = self.timer.as_ref().is_some_and(|timer| timer.drain_ticks() > 0);
        if fired {
            self.next(page);
        }
        self.fade.finish(page, now);
    }

    /// Re-apply the current slide's theme, e.g. after a dark-mode change.
    pub fn refresh_theme<P: Page + ?Sized>(&self, page: &mut P) {
        self.theme.apply_theme(page, self.current);
    }

    fn write_counter<P: Page + ?Sized>(&self, page: &mut P) {
        let counter = format!("{} / {}", self.current + 1, self.slides.len());
        page.set_text(Region::SlideCounter, &counter);
    }
}

/// `((index mod len) + len) mod len`.
///
/// # Panics
///
/// Panics if `len` is zero. [`Slideshow::new`] rejects empty slide lists,
/// so slideshow navigation never hits this.
pub fn wrap_index(index: i64, len: usize) -> usize {
    index.rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Document;
    use crate::scheme::{DEFAULT_SCHEMES, DEFAULT_SLIDES};
    use crate::theme::ThemeSettings;

    fn slideshow(timing: SlideshowTiming) -> Slideshow {
        let theme = ThemeSynchronizer::new(DEFAULT_SCHEMES.to_vec(), ThemeSettings::default(), || false);
        let slides = DEFAULT_SLIDES.iter().map(|s| s.to_string()).collect();
        Slideshow::new(slides, theme, timing).unwrap()
    }

    #[test]
    fn go_to_wraps_in_both_directions() {
        let mut show = slideshow(SlideshowTiming::default());
        let mut doc = Document::profile();
        show.go_to(&mut doc, -1);
        assert_eq!(show.current_index(), 4);
        show.go_to(&mut doc, 5);
        assert_eq!(show.current_index(), 0);
        show.go_to(&mut doc, 7);
        assert_eq!(show.current_index(), 2);
        show.go_to(&mut doc, -11);
        assert_eq!(show.current_index(), 4);
    }

    #[test]
    fn go_to_updates_image_counter_and_theme() {
        let mut show = slideshow(SlideshowTiming::default());
        let mut doc = Document::profile();
        show.init(&mut doc);
        assert_eq!(doc.text(Region::SlideCounter), Some("1 / 5"));
        assert_eq!(doc.text(Region::AutoAdvanceButton), Some(START_LABEL));

        show.go_to(&mut doc, 3);
        assert_eq!(doc.source(Region::SlideImage), Some("Ventura.jpg"));
        assert_eq!(doc.text(Region::SlideCounter), Some("4 / 5"));
        assert_eq!(
            doc.color(Region::Root, Property::BackgroundColor),
            Some(DEFAULT_SCHEMES[3].background)
        );
    }

    #[test]
    fn fade_out_then_in_on_poll() {
        let mut show = slideshow(SlideshowTiming::default());
        let mut doc = Document::profile();
        show.next(&mut doc);
        assert_eq!(doc.style(Region::SlideImage, Property::Opacity), Some(&StyleValue::Opacity(0.0)));
        assert!(show.is_fading());

        show.poll(&mut doc, Instant::now() + Duration::from_secs(1));
        assert_eq!(doc.style(Region::SlideImage, Property::Opacity), Some(&StyleValue::Opacity(1.0)));
        assert!(!show.is_fading());
    }

    #[test]
    fn fade_waits_for_its_deadline() {
        let mut doc = Document::profile();
        let mut fade = Fade::new(Region::ProfileImage, Duration::from_millis(150));
        let start = Instant::now();
        fade.start(&mut doc, start);
        assert_eq!(
            doc.style(Region::ProfileImage, Property::Transition),
            Some(&StyleValue::Transition("opacity 0.3s ease"))
        );

        assert!(!fade.finish(&mut doc, start + Duration::from_millis(100)));
        assert_eq!(doc.style(Region::ProfileImage, Property::Opacity), Some(&StyleValue::Opacity(0.0)));
        assert!(fade.is_active());

        assert!(fade.finish(&mut doc, start + Duration::from_millis(150)));
        assert_eq!(doc.style(Region::ProfileImage, Property::Opacity), Some(&StyleValue::Opacity(1.0)));
        assert!(!fade.finish(&mut doc, start + Duration::from_secs(1)));
    }

    #[test]
    fn next_then_prev_round_trips() {
        let mut show = slideshow(SlideshowTiming::default());
        let mut doc = Document::profile();
        for start in 0..5 {
            show.go_to(&mut doc, start);
            show.next(&mut doc);
            show.prev(&mut doc);
            assert_eq!(show.current_index(), start as usize);
        }
    }

    #[test]
    fn toggling_twice_leaves_no_timer() {
        let mut show = slideshow(SlideshowTiming::default());
        let mut doc = Document::profile();
        assert_eq!(show.toggle_auto_advance(&mut doc), AutoAdvance::Running);
        assert_eq!(doc.text(Region::AutoAdvanceButton), Some(STOP_LABEL));
        assert_eq!(show.toggle_auto_advance(&mut doc), AutoAdvance::Idle);
        assert_eq!(doc.text(Region::AutoAdvanceButton), Some(START_LABEL));
        assert!(show.timer.is_none());
    }

    #[test]
    fn running_timer_advances_on_poll() {
        let mut show = slideshow(SlideshowTiming {
            interval: Duration::from_millis(10),
            fade_delay: Duration::from_millis(150),
        });
        let mut doc = Document::profile();
        show.toggle_auto_advance(&mut doc);

        let deadline = Instant::now() + Duration::from_secs(5);
        while show.current_index() == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            show.poll(&mut doc, Instant::now());
        }
        assert_ne!(show.current_index(), 0);
        show.toggle_auto_advance(&mut doc);
    }

    #[test]
    fn missed_ticks_advance_only_once() {
        let mut show = slideshow(SlideshowTiming {
            interval: Duration::from_millis(10),
            fade_delay: Duration::from_millis(150),
        });
        let mut doc = Document::profile();
        show.toggle_auto_advance(&mut doc);

        // Roughly a dozen periods pass without the owner polling.
        thread::sleep(Duration::from_millis(125));
        show.poll(&mut doc, Instant::now());
        show.toggle_auto_advance(&mut doc);
        assert_eq!(show.current_index(), 1);
        assert_eq!(doc.text(Region::SlideCounter), Some("2 / 5"));
    }

    #[test]
    fn stalled_timer_buffers_a_single_tick() {
        let timer = AutoAdvanceTimer::start(Duration::from_millis(20));
        thread::sleep(Duration::from_millis(150));
        assert_eq!(timer.drain_ticks(), 1);
        timer.stop();
    }

    #[test]
    #[should_panic]
    fn wrap_index_rejects_empty_range() {
        wrap_index(3, 0);
    }

    #[test]
    fn stopped_timer_thread_exits_and_stays_silent() {
        let mut timer = AutoAdvanceTimer::start(Duration::from_millis(5));
        assert!(timer.is_active());
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut ticks = 0;
        while ticks == 0 && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            ticks = timer.drain_ticks();
        }
        assert!(ticks >= 1);

        timer.shutdown();
        assert!(!timer.is_active());
        timer.drain_ticks();
        thread::sleep(Duration::from_millis(20));
        assert_eq!(timer.drain_ticks(), 0);
        // Second shutdown is harmless.
        timer.shutdown();
    }

    #[test]
    fn rejects_empty_and_mismatched_lists() {
        let theme = ThemeSynchronizer::new(DEFAULT_SCHEMES.to_vec(), ThemeSettings::default(), || false);
        assert_eq!(
            Slideshow::new(Vec::new(), theme, SlideshowTiming::default()).unwrap_err(),
            SlideshowError::Empty
        );
        let theme = ThemeSynchronizer::new(DEFAULT_SCHEMES.to_vec(), ThemeSettings::default(), || false);
        assert_eq!(
            Slideshow::new(vec!["a.jpg".into()], theme, SlideshowTiming::default()).unwrap_err(),
            SlideshowError::SchemeMismatch { slides: 1, schemes: 5 }
        );
    }
}

//! Core model of the playhead widget.

use super::keymap::{default_key_map, KeyMap};
use super::options::PlayheadOption;
use super::types::{
    FrameMsg, Hooks, PlayPauseFunc, PressMsg, ScrubbingFunc, SeekFunc, TruthMsg, WheelMsg,
};
use crate::grab::{GrabGuard, SharedGrab};
use crate::interpolation::Engine;
use crate::scrub::{Controller, Direction, Mode};
use crate::seek::seek_target_ms;
use crate::truth::Truth;
use crate::Component;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{Duration, Instant};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

pub(super) const DEFAULT_FPS: u32 = 60;
pub(super) const DEFAULT_WIDTH: i32 = 40;
pub(super) const DEFAULT_LABEL_THRESHOLD: f64 = 8.0;

/// A playback-progress bar that interpolates between position reports and
/// can be scrubbed with the wheel or the keyboard.
///
/// While idle the bar advances on its own at the playback rate, never more
/// than `slack` points ahead of the last report. A press on the track starts
/// a scrub: interpolation stops, wheel and arrow events move a cursor in
/// fixed steps, Enter seeks there and Escape returns to the reported
/// position.
///
/// # Examples
///
/// ```rust
/// use bubbletea_playhead::playhead::new;
/// use bubbletea_playhead::truth::Truth;
/// use std::sync::{Arc, Mutex};
///
/// let seeks = Arc::new(Mutex::new(Vec::new()));
/// let sink = seeks.clone();
///
/// let mut playhead = new(Truth::new(50.0, false, 200_000), &[]);
/// playhead.set_on_seek(Box::new(move |ms| sink.lock().unwrap().push(ms)));
///
/// playhead.press();
/// playhead.nudge_forward();
/// playhead.nudge_forward();
/// playhead.nudge_forward();
/// playhead.commit();
///
/// assert_eq!(*seeks.lock().unwrap(), vec![103_000]);
/// ```
pub struct Model {
    id: i64,
    /// Identifies the live frame loop; bumping it cancels a pending frame.
    tag: i64,

    engine: Engine,
    /// Last state reported by the player, independent of the engine anchor.
    reported: Truth,
    scrub: Controller,
    hooks: Hooks,
    grab: Option<SharedGrab>,
    focus: bool,
    fps: u32,

    /// Key bindings.
    pub keymap: KeyMap,

    /// Total width of the bar in cells.
    pub width: i32,
    /// Character for filled cells.
    pub full: char,
    /// Color of filled cells (hex or named color string).
    pub full_color: String,
    /// Character for empty cells.
    pub empty: char,
    /// Color of empty cells (hex or named color string).
    pub empty_color: String,
    /// Color of the scrub time label.
    pub label_color: String,
    /// Below this position (in percent) the scrub label is drawn after the
    /// fill instead of inside it.
    pub label_threshold: f64,
}

/// Creates a playhead showing `truth`, configured by `opts`.
pub fn new(truth: Truth, opts: &[PlayheadOption]) -> Model {
    let mut m = Model {
        id: next_id(),
        tag: 0,
        engine: Engine::new(truth, Instant::now()),
        reported: truth,
        scrub: Controller::default(),
        hooks: Hooks::default(),
        grab: None,
        focus: false,
        fps: DEFAULT_FPS,
        keymap: default_key_map(),
        width: DEFAULT_WIDTH,
        full: '█',
        full_color: "#FFFFFF".to_string(),
        empty: '░',
        empty_color: "#606060".to_string(),
        label_color: "#1A1A1A".to_string(),
        label_threshold: DEFAULT_LABEL_THRESHOLD,
    };

    for opt in opts {
        opt.apply(&mut m);
    }

    m
}

impl Model {
    /// Unique identifier of this widget, used to route messages.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The position currently rendered, in percent.
    pub fn displayed(&self) -> f64 {
        self.scrub
            .position()
            .unwrap_or_else(|| self.engine.displayed())
    }

    /// The last reported playback state.
    ///
    /// Unaffected by commits: a committed scrub only moves the
    /// [`anchor`](Model::anchor) until the player reports again.
    pub fn truth(&self) -> Truth {
        self.reported
    }

    /// The state interpolation currently runs from.
    ///
    /// Equal to [`truth`](Model::truth) except between a commit and the next
    /// report, when it sits at the committed position.
    pub fn anchor(&self) -> Truth {
        self.engine.truth()
    }

    /// The current interaction mode.
    pub fn mode(&self) -> &Mode {
        self.scrub.mode()
    }

    /// Whether a scrub session is active.
    ///
    /// While this is true the widget consumes wheel and arrow input and the
    /// host should not scroll its own views.
    pub fn is_scrubbing(&self) -> bool {
        self.scrub.is_scrubbing()
    }

    /// The scrub offset, once the user has moved it in the current session.
    pub fn scrub_offset(&self) -> Option<f64> {
        match self.scrub.mode() {
            Mode::Scrubbing(session) => session.offset(),
            Mode::Idle => None,
        }
    }

    /// Interpolation frame rate.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Sets the interpolation frame rate. Zero falls back to 60.
    pub fn set_fps(&mut self, fps: u32) {
        self.fps = if fps == 0 { DEFAULT_FPS } else { fps };
    }

    /// How far the display may run ahead of truth, in percentage points.
    pub fn slack(&self) -> f64 {
        self.engine.slack()
    }

    /// Sets the forward-drift bound.
    pub fn set_slack(&mut self, slack: f64) {
        self.engine.set_slack(slack);
    }

    /// Percentage points moved per scrub event.
    pub fn scrub_step(&self) -> f64 {
        self.scrub.step()
    }

    /// Sets the scrub step. Ignored while a scrub is active.
    pub fn set_scrub_step(&mut self, step: f64) {
        if !self.is_scrubbing() {
            self.scrub = Controller::new(step);
        }
    }

    /// Installs the host input grab held while scrubbing.
    pub fn set_input_grab(&mut self, grab: SharedGrab) {
        self.grab = Some(grab);
    }

    /// Sets the hook called with the seek target when a scrub is committed.
    pub fn set_on_seek(&mut self, f: SeekFunc) {
        self.hooks.on_seek = Some(f);
    }

    /// Sets the hook called when scrubbing starts or ends.
    pub fn set_on_scrubbing_change(&mut self, f: ScrubbingFunc) {
        self.hooks.on_scrubbing_change = Some(f);
    }

    /// Sets the hook called when the user toggles playback.
    pub fn set_on_play_pause(&mut self, f: PlayPauseFunc) {
        self.hooks.on_play_pause = Some(f);
    }

    /// Returns the command that starts the frame loop, if the display
    /// should be moving.
    pub fn init(&self) -> Option<Cmd> {
        self.eligible().then(|| self.next_frame())
    }

    /// Applies a new playback report.
    ///
    /// While idle the display jumps to the report and interpolation restarts
    /// from now; the returned command drives it. While scrubbing the report
    /// is only stored and takes effect when the scrub ends.
    pub fn set_truth(&mut self, truth: Truth) -> Option<Cmd> {
        self.set_truth_at(truth, Instant::now())
    }

    /// Like [`set_truth`](Model::set_truth) with an explicit arrival time.
    pub fn set_truth_at(&mut self, truth: Truth, now: Instant) -> Option<Cmd> {
        self.reported = truth;
        if self.is_scrubbing() {
            self.engine.store(truth);
            return None;
        }
        self.engine.reset(truth, now);
        self.restart_frames()
    }

    /// Moves an idle display to where playback should be at `now`.
    ///
    /// Does nothing while scrubbing. Returns the displayed position.
    pub fn advance(&mut self, now: Instant) -> f64 {
        if !self.is_scrubbing() {
            self.engine.advance(now);
        }
        self.displayed()
    }

    /// Starts a scrub session at the current display position.
    ///
    /// Interpolation stops, the input grab is acquired and the scrubbing
    /// hook fires. Does nothing if a session is already active.
    pub fn press(&mut self) -> Option<Cmd> {
        if self.is_scrubbing() {
            return None;
        }
        let baseline = self.engine.displayed();
        let guard = self.grab.clone().map(GrabGuard::acquire);
        self.scrub.begin(baseline, guard);
        self.cancel_frames();
        self.hooks.scrubbing_changed(true);
        None
    }

    /// Moves the scrub position one step back. Ignored while idle.
    pub fn nudge_backward(&mut self) {
        self.nudge(Direction::Backward);
    }

    /// Moves the scrub position one step forward. Ignored while idle.
    pub fn nudge_forward(&mut self) {
        self.nudge(Direction::Forward);
    }

    fn nudge(&mut self, direction: Direction) {
        if let Some(offset) = self.scrub.nudge(direction) {
            tracing::trace!(offset, "Scrub moved");
        }
    }

    /// Ends the scrub and seeks to its position.
    ///
    /// The display stays at the scrubbed position and interpolation resumes
    /// from there until the next report. If the position was never moved no
    /// seek is emitted and the display returns to the reported position.
    /// Ignored while idle.
    pub fn commit(&mut self) -> Option<Cmd> {
        let committed = self.scrub.commit()?;
        let now = Instant::now();
        let truth = self.reported;

        match committed.offset {
            Some(offset) => {
                self.engine
                    .reset(Truth::new(offset, truth.is_playing, truth.duration_ms), now);
                self.hooks.scrubbing_changed(false);
                let target = seek_target_ms(offset, truth.duration_ms);
                tracing::debug!(offset, target, "Seek requested");
                self.hooks.seek(target);
            }
            None => {
                self.engine.reset(truth, now);
                self.hooks.scrubbing_changed(false);
            }
        }

        self.restart_frames()
    }

    /// Ends the scrub without seeking; the display returns to the last
    /// reported position. Ignored while idle.
    pub fn cancel(&mut self) -> Option<Cmd> {
        if !self.scrub.cancel() {
            return None;
        }
        self.engine.reset(self.reported, Instant::now());
        self.hooks.scrubbing_changed(false);
        self.restart_frames()
    }

    /// Invokes the play/pause hook.
    pub fn play_pause(&mut self) {
        self.hooks.play_pause();
    }

    /// Processes a message.
    ///
    /// Handles [`FrameMsg`], [`TruthMsg`], [`PressMsg`], [`WheelMsg`] and
    /// `KeyMsg`. Wheel and scrub keys are only acted on while scrubbing; the
    /// play/pause key only while idle and focused.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            return self.on_frame(frame);
        }

        if let Some(truth_msg) = msg.downcast_ref::<TruthMsg>() {
            if truth_msg.id != 0 && truth_msg.id != self.id {
                return None;
            }
            return self.set_truth(truth_msg.truth);
        }

        if let Some(press) = msg.downcast_ref::<PressMsg>() {
            if press.id != 0 && press.id != self.id {
                return None;
            }
            return self.press();
        }

        if let Some(wheel) = msg.downcast_ref::<WheelMsg>() {
            if let Some(direction) = Direction::from_delta(wheel.delta_x) {
                self.nudge(direction);
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.on_key(key);
        }

        None
    }

    fn on_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if self.is_scrubbing() {
            if self.keymap.commit.matches(key) {
                return self.commit();
            }
            if self.keymap.cancel.matches(key) {
                return self.cancel();
            }
            if self.keymap.backward.matches(key) {
                self.nudge_backward();
            } else if self.keymap.forward.matches(key) {
                self.nudge_forward();
            }
            return None;
        }

        if self.focus && self.keymap.play_pause.matches(key) {
            self.play_pause();
        }
        None
    }

    fn on_frame(&mut self, frame: &FrameMsg) -> Option<Cmd> {
        if frame.id != self.id || frame.tag != self.tag {
            return None;
        }
        if !self.eligible() {
            return None;
        }
        self.engine.advance(Instant::now());
        Some(self.next_frame())
    }

    /// Idle, playing and with a known duration.
    fn eligible(&self) -> bool {
        !self.is_scrubbing() && self.engine.advances()
    }

    /// Invalidates any pending frame.
    fn cancel_frames(&mut self) {
        self.tag += 1;
    }

    /// Invalidates any pending frame and starts a new loop when eligible.
    fn restart_frames(&mut self) -> Option<Cmd> {
        self.cancel_frames();
        self.eligible().then(|| self.next_frame())
    }

    pub(super) fn frame_tag(&self) -> i64 {
        self.tag
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let interval = Duration::from_nanos(1_000_000_000 / u64::from(self.fps));

        bubbletea_tick(interval, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        self.cancel_frames();
        // Ending the session here releases the input grab; hooks are not
        // called during teardown.
        self.scrub.cancel();
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("engine", &self.engine)
            .field("scrub", &self.scrub)
            .field("hooks", &self.hooks)
            .field("focus", &self.focus)
            .field("fps", &self.fps)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let model = new(Truth::default(), &[]);
        let cmd = Model::init(&model);
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

impl Default for Model {
    fn default() -> Self {
        new(Truth::default(), &[])
    }
}

//! Drag state for the swipe card: converts a pointer drag into a live visual
//! transform and, once the release crosses the commit threshold, a single
//! discrete keep / cross-off decision.

use crate::data::VoteKind;

/// Horizontal distance (in input-coordinate units) a drag must travel before
/// release commits a vote.
pub static COMMIT_THRESHOLD: f64 = 100.0;
static ROTATION_DIVISOR: f64 = 10.0;
static FADE_DIVISOR: f64 = 300.0;
static MIN_OPACITY: f64 = 0.7;
static BADGE_DIVISOR: f64 = 150.0;

/// Single-threaded and synchronous; re-entry while a committed vote is still
/// being persisted is prevented solely by the externally toggled disabled
/// flag, which the caller sets after a commit and clears once the remote call
/// resolves either way.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
	origin: (f64, f64),
	offset: (f64, f64),
	active: bool,
	disabled: bool,
}

impl SwipeGesture {
	pub fn begin(&mut self, x: f64, y: f64) {
		if self.disabled || self.active {
			return;
		}
		self.active = true;
		self.origin = (x, y);
	}

	pub fn update(&mut self, x: f64, y: f64) {
		if !self.active || self.disabled {
			return;
		}
		self.offset = (x - self.origin.0, y - self.origin.1);
	}

	/// Ends the drag. Returns the committed decision, if any; the offset is
	/// reset to the origin regardless.
	pub fn end(&mut self) -> Option<VoteKind> {
		if !self.active || self.disabled {
			return None;
		}
		self.active = false;
		let decision = match self.offset.0.abs() > COMMIT_THRESHOLD {
			true if self.offset.0 > 0.0 => Some(VoteKind::Keep),
			true => Some(VoteKind::Cross),
			false => None,
		};
		self.offset = (0.0, 0.0);
		decision
	}

	pub fn set_disabled(&mut self, disabled: bool) {
		self.disabled = disabled;
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn offset(&self) -> (f64, f64) {
		self.offset
	}

	/// Card tilt in degrees while dragging, level otherwise.
	pub fn rotation(&self) -> f64 {
		match self.active {
			true => self.offset.0 / ROTATION_DIVISOR,
			false => 0.0,
		}
	}

	/// Card opacity fades with horizontal travel but never below 0.7.
	pub fn opacity(&self) -> f64 {
		match self.active {
			true => (1.0 - self.offset.0.abs() / FADE_DIVISOR).max(MIN_OPACITY),
			false => 1.0,
		}
	}

	/// Opacity ramp for the KEEP overlay badge while dragging right.
	pub fn keep_badge_opacity(&self) -> f64 {
		(self.offset.0 / BADGE_DIVISOR).max(0.0)
	}

	/// Opacity ramp for the NOPE overlay badge while dragging left.
	pub fn cross_badge_opacity(&self) -> f64 {
		(-self.offset.0 / BADGE_DIVISOR).max(0.0)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn dragged_to(x: f64, y: f64) -> SwipeGesture {
		let mut gesture = SwipeGesture::default();
		gesture.begin(0.0, 0.0);
		gesture.update(x, y);
		gesture
	}

	#[test]
	fn commits_keep_past_right_threshold() {
		let mut gesture = dragged_to(101.0, 30.0);
		assert_eq!(gesture.end(), Some(VoteKind::Keep));
		assert_eq!(gesture.offset(), (0.0, 0.0));
		assert!(!gesture.is_active());
	}

	#[test]
	fn commits_cross_past_left_threshold() {
		let mut gesture = dragged_to(-150.0, 0.0);
		assert_eq!(gesture.end(), Some(VoteKind::Cross));
		assert_eq!(gesture.offset(), (0.0, 0.0));
	}

	#[test]
	fn release_inside_threshold_commits_nothing() {
		let mut gesture = dragged_to(100.0, 0.0);
		assert_eq!(gesture.end(), None);
		assert_eq!(gesture.offset(), (0.0, 0.0));

		let mut gesture = dragged_to(-99.0, 200.0);
		assert_eq!(gesture.end(), None);
	}

	#[test]
	fn vertical_travel_never_commits() {
		let mut gesture = dragged_to(0.0, 500.0);
		assert_eq!(gesture.end(), None);
	}

	#[test]
	fn only_the_final_offset_decides() {
		let mut gesture = SwipeGesture::default();
		gesture.begin(0.0, 0.0);
		gesture.update(-300.0, 0.0);
		gesture.update(140.0, 10.0);
		assert_eq!(gesture.end(), Some(VoteKind::Keep));
	}

	#[test]
	fn rotation_tracks_offset_while_active() {
		let gesture = dragged_to(120.0, 0.0);
		assert_eq!(gesture.rotation(), 12.0);

		let mut gesture = gesture;
		let _ = gesture.end();
		assert_eq!(gesture.rotation(), 0.0);
	}

	#[test]
	fn opacity_clamps_at_minimum() {
		let gesture = dragged_to(30.0, 0.0);
		assert_eq!(gesture.opacity(), 0.9);

		let gesture = dragged_to(-3000.0, 0.0);
		assert_eq!(gesture.opacity(), 0.7);

		let mut gesture = gesture;
		let _ = gesture.end();
		assert_eq!(gesture.opacity(), 1.0);
	}

	#[test]
	fn badge_opacity_never_negative() {
		let gesture = dragged_to(75.0, 0.0);
		assert_eq!(gesture.keep_badge_opacity(), 0.5);
		assert_eq!(gesture.cross_badge_opacity(), 0.0);

		let gesture = dragged_to(-75.0, 0.0);
		assert_eq!(gesture.keep_badge_opacity(), 0.0);
		assert_eq!(gesture.cross_badge_opacity(), 0.5);
	}

	#[test]
	fn disabled_engine_ignores_everything() {
		let mut gesture = SwipeGesture::default();
		gesture.set_disabled(true);
		gesture.begin(0.0, 0.0);
		assert!(!gesture.is_active());
		gesture.update(500.0, 0.0);
		assert_eq!(gesture.offset(), (0.0, 0.0));
		assert_eq!(gesture.end(), None);
	}

	#[test]
	fn begin_while_active_keeps_first_origin() {
		let mut gesture = SwipeGesture::default();
		gesture.begin(10.0, 10.0);
		gesture.begin(500.0, 500.0);
		gesture.update(130.0, 10.0);
		assert_eq!(gesture.offset(), (120.0, 0.0));
	}

	#[test]
	fn update_before_begin_is_ignored() {
		let mut gesture = SwipeGesture::default();
		gesture.update(200.0, 0.0);
		assert_eq!(gesture.offset(), (0.0, 0.0));
		assert_eq!(gesture.end(), None);
	}
}

//! Timed servo driver for the barrier arm
//!
//! This driver provides:
//! - Rate-limited arm motion between a raised and a lowered angle
//! - Validation of angle, timing and pulse-width parameters
//! - No output at all until a fully valid configuration is accepted
//!
//! # Usage
//!
//! The logical level selects the target: HIGH lowers the arm to
//! `down_angle`, LOW raises it to `up_angle`. `tick()` is called once per
//! main-loop cycle and moves the arm one degree each time the per-degree
//! interval elapses, emitting one pulse width per degree travelled.
//!
//! ```ignore
//! let mut servo = Servo::new(port, ClockWork::new(&clock), false);
//! servo.start_motor(&ServoConfig::new(10, 3000))?;
//!
//! servo.write(true); // lower the arm
//! loop {
//!     servo.tick();
//! }
//! ```
//!
//! A new `write()` while the arm is travelling reverses it on the next
//! tick; it does not finish the old travel first.

use levelcross_core::config::{ServoConfig, SERVO_LIMITS};
use levelcross_core::timing::Timer;
use levelcross_core::traits::OutputDriver;
use levelcross_hal::ServoPort;

/// Reasons a servo configuration is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServoError {
    /// Raised angle or travel outside the servo's angle envelope
    AngleOutOfRange,
    /// Travel time gives less than the minimum interval per degree
    TravelTooFast,
    /// Pulse widths outside the envelope, or min not below max
    PulseWidthOutOfRange,
}

/// Arm motion phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    /// Resting at an extreme (or waiting for a target)
    #[default]
    Stable,
    /// Travelling towards `up_angle`
    MovingUp,
    /// Travelling towards `down_angle`
    MovingDown,
}

/// Validated motion parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Geometry {
    up_angle: i16,
    down_angle: i16,
    step_ms: u32,
    min_pulse_us: u16,
    max_pulse_us: u16,
}

impl Geometry {
    /// Validate a configuration as a whole
    fn from_config(config: &ServoConfig) -> Result<Self, ServoError> {
        let (up_angle, down_angle) = check_angles(config.angle_adjust, config.angle_diff)?;
        let step_ms = check_travel(config.travel_ms, up_angle, down_angle)?;
        let (min_pulse_us, max_pulse_us) = check_pulses(config.min_pulse_us, config.max_pulse_us)?;
        Ok(Self {
            up_angle,
            down_angle,
            step_ms,
            min_pulse_us,
            max_pulse_us,
        })
    }

    /// Map an angle linearly onto the pulse-width range
    fn pulse_us(&self, angle: i16) -> u16 {
        let angle_span = i32::from(SERVO_LIMITS.angle_max - SERVO_LIMITS.angle_min);
        let pulse_span = i32::from(self.max_pulse_us - self.min_pulse_us);
        let offset = i32::from(angle - SERVO_LIMITS.angle_min) * pulse_span / angle_span;
        let min = i32::from(self.min_pulse_us);
        let max = i32::from(self.max_pulse_us);
        // Bounded by the u16 limits above
        (min + offset).clamp(min, max) as u16
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            up_angle: SERVO_LIMITS.angle_min,
            down_angle: SERVO_LIMITS.angle_min + SERVO_LIMITS.default_angle_diff,
            step_ms: SERVO_LIMITS.min_step_ms,
            min_pulse_us: SERVO_LIMITS.pulse_min_us,
            max_pulse_us: SERVO_LIMITS.pulse_max_us,
        }
    }
}

fn check_angles(angle_adjust: i16, angle_diff: i16) -> Result<(i16, i16), ServoError> {
    let limits = &SERVO_LIMITS;
    if !(limits.angle_min..=limits.angle_max).contains(&angle_diff) {
        return Err(ServoError::AngleOutOfRange);
    }
    let max_up = limits.angle_max - angle_diff;
    if !(limits.angle_min..=max_up).contains(&angle_adjust) {
        return Err(ServoError::AngleOutOfRange);
    }
    Ok((angle_adjust, angle_adjust + angle_diff))
}

fn check_travel(travel_ms: u32, up_angle: i16, down_angle: i16) -> Result<u32, ServoError> {
    let span = down_angle.abs_diff(up_angle);
    let step_ms = if span > 0 {
        travel_ms / u32::from(span)
    } else {
        SERVO_LIMITS.min_step_ms
    };
    if step_ms < SERVO_LIMITS.min_step_ms {
        return Err(ServoError::TravelTooFast);
    }
    Ok(step_ms)
}

fn check_pulses(min_pulse_us: u16, max_pulse_us: u16) -> Result<(u16, u16), ServoError> {
    let envelope = SERVO_LIMITS.pulse_min_us..=SERVO_LIMITS.pulse_max_us;
    if !envelope.contains(&min_pulse_us) || !envelope.contains(&max_pulse_us) {
        return Err(ServoError::PulseWidthOutOfRange);
    }
    if min_pulse_us >= max_pulse_us {
        return Err(ServoError::PulseWidthOutOfRange);
    }
    Ok((min_pulse_us, max_pulse_us))
}

/// Servo output driver
///
/// Until [`start_motor`](Self::start_motor) succeeds the servo is detached:
/// it accepts writes but never moves and never touches the port.
pub struct Servo<P, T> {
    port: P,
    timer: T,
    level: bool,
    attached: bool,
    motion: Motion,
    geometry: Geometry,
    angle: i16,
}

impl<P: ServoPort, T: Timer> Servo<P, T> {
    /// Create a detached servo with an initial logical level
    pub fn new(port: P, timer: T, level: bool) -> Self {
        let geometry = Geometry::default();
        Self {
            port,
            timer,
            level,
            attached: false,
            motion: Motion::Stable,
            angle: geometry.up_angle,
            geometry,
        }
    }

    /// Validate the configuration and attach to the port
    ///
    /// The arm is placed at the extreme matching the current level and its
    /// position is emitted once. On error nothing changes: a detached servo
    /// stays detached, an attached one keeps its previous configuration.
    pub fn start_motor(&mut self, config: &ServoConfig) -> Result<(), ServoError> {
        let geometry = match Geometry::from_config(config) {
            Ok(geometry) => geometry,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("servo configuration rejected: {}", e);
                return Err(e);
            }
        };

        self.geometry = geometry;
        self.angle = self.target_angle();
        self.motion = Motion::Stable;
        self.attached = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "servo attached: up {} down {} step {} ms",
            geometry.up_angle,
            geometry.down_angle,
            geometry.step_ms
        );

        self.send_out();
        Ok(())
    }

    /// Check if a valid configuration has been accepted
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Get the current arm angle (degrees)
    pub fn angle(&self) -> i16 {
        self.angle
    }

    /// Get the current motion phase
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Get the raised arm angle
    pub fn up_angle(&self) -> i16 {
        self.geometry.up_angle
    }

    /// Get the lowered arm angle
    pub fn down_angle(&self) -> i16 {
        self.geometry.down_angle
    }

    /// Get the interval between one-degree steps (ms)
    pub fn step_ms(&self) -> u32 {
        self.geometry.step_ms
    }

    /// Get the pulse width for the current angle (µs)
    pub fn pulse_us(&self) -> u16 {
        self.geometry.pulse_us(self.angle)
    }

    /// Get access to the underlying port
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Angle at which the current level comes to rest
    fn target_angle(&self) -> i16 {
        if self.level {
            self.geometry.down_angle
        } else {
            self.geometry.up_angle
        }
    }

    fn send_out(&mut self) {
        if self.attached {
            let width = self.geometry.pulse_us(self.angle);
            self.port.write_pulse_us(width);
        }
    }

    fn begin(&mut self, motion: Motion) {
        self.motion = motion;
        self.timer.arm(self.geometry.step_ms);
    }

    /// Move one degree if the step interval has elapsed
    fn step(&mut self, delta: i16) {
        if self.timer.has_triggered() {
            self.angle += delta;
            self.timer.arm(self.geometry.step_ms);
            self.send_out();
        }
    }
}

impl<P: ServoPort, T: Timer> OutputDriver for Servo<P, T> {
    /// Set the target; the port is only written by `tick`
    fn write(&mut self, high: bool) {
        self.level = high;
    }

    fn level(&self) -> bool {
        self.level
    }

    fn tick(&mut self) {
        if !self.attached {
            return;
        }

        let Geometry {
            up_angle,
            down_angle,
            ..
        } = self.geometry;

        match self.motion {
            Motion::Stable => {
                if self.level && self.angle < down_angle {
                    self.begin(Motion::MovingDown);
                } else if !self.level && self.angle > up_angle {
                    self.begin(Motion::MovingUp);
                }
            }
            Motion::MovingDown => {
                if !self.level {
                    self.motion = Motion::MovingUp;
                } else if self.angle < down_angle {
                    self.step(1);
                } else {
                    self.motion = Motion::Stable;
                }
            }
            Motion::MovingUp => {
                if self.level {
                    self.motion = Motion::MovingDown;
                } else if self.angle > up_angle {
                    self.step(-1);
                } else {
                    self.motion = Motion::Stable;
                }
            }
        }
    }
}

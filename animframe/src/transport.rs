//! The play/step gate a painted frame waits on.

bitflags! {
    struct TransportFlags: u8 {
        const PLAYING = 1;
        const ADVANCE = 2;
    }
}

/// Playback state toggled by the toolbar.
///
/// Paused is no flags, playing is `PLAYING`, and a pending single step is
/// `PLAYING | ADVANCE`: the next gate check lets one frame through and drops
/// back to paused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transport {
    flags: TransportFlags,
}

impl Transport {
    pub fn new(playing: bool) -> Transport {
        let flags = if playing {
            TransportFlags::PLAYING
        } else {
            TransportFlags::empty()
        };
        Transport { flags }
    }

    /// True while frames run freely
    pub fn is_playing(&self) -> bool {
        self.flags == TransportFlags::PLAYING
    }

    /// True while a single step has been requested but not yet taken
    pub fn is_stepping(&self) -> bool {
        self.flags.contains(TransportFlags::ADVANCE)
    }

    /// Whether the frame advance button should accept clicks
    pub fn can_advance(&self) -> bool {
        !self.is_playing()
    }

    /// Switches between playing and paused. A pending step becomes playing.
    pub fn toggle_play(&mut self) {
        self.flags = if self.is_playing() {
            TransportFlags::empty()
        } else {
            TransportFlags::PLAYING
        };
    }

    /// Requests a single step. Ignored unless paused.
    pub fn frame_advance(&mut self) {
        if self.flags.is_empty() {
            self.flags = TransportFlags::PLAYING | TransportFlags::ADVANCE;
        }
    }

    /// Checks whether a waiting frame may continue, consuming a pending step
    pub fn pass(&mut self) -> bool {
        if !self.flags.contains(TransportFlags::PLAYING) {
            return false;
        }

        if self.flags.contains(TransportFlags::ADVANCE) {
            self.flags = TransportFlags::empty();
        }
        true
    }
}

impl Default for Transport {
    fn default() -> Transport {
        Transport::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_gate_stays_closed() {
        let mut transport = Transport::default();
        assert!(!transport.is_playing());
        assert!(transport.can_advance());
        assert!(!transport.pass());
        assert!(!transport.pass());
    }

    #[test]
    fn step_lets_exactly_one_frame_through() {
        let mut transport = Transport::default();
        transport.frame_advance();
        assert!(transport.is_stepping());
        assert!(!transport.is_playing());

        assert!(transport.pass());
        assert!(!transport.pass());
        assert_eq!(transport, Transport::default());
    }

    #[test]
    fn repeated_steps_before_the_gate_do_not_accumulate() {
        let mut transport = Transport::default();
        transport.frame_advance();
        transport.frame_advance();

        assert!(transport.pass());
        assert!(!transport.pass());
    }

    #[test]
    fn playing_keeps_the_gate_open_until_paused() {
        let mut transport = Transport::default();
        transport.toggle_play();
        assert!(transport.is_playing());
        assert!(!transport.can_advance());

        for _ in 0..5 {
            assert!(transport.pass());
        }

        transport.toggle_play();
        assert!(!transport.pass());
    }

    #[test]
    fn advance_is_ignored_while_playing() {
        let mut transport = Transport::new(true);
        transport.frame_advance();
        assert!(transport.is_playing());
        assert!(transport.pass());
        assert!(transport.pass());
    }

    #[test]
    fn play_during_a_pending_step_starts_playing() {
        let mut transport = Transport::default();
        transport.frame_advance();
        transport.toggle_play();

        assert!(transport.is_playing());
        assert!(transport.pass());
        assert!(transport.pass());
    }
}

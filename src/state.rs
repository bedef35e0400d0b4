//! The position within a FASTQ record that the next line is expected to fill.

use crate::Line;

/// The state of the line classifier.
///
/// Header and separator lines are consumed in the same step that recognizes
/// them, so they have no state of their own.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// Not inside a record, or between the parts of one.
    #[default]
    Idle,

    /// A header was just read, so the next line is sequence data.
    InSequence,

    /// A separator was just read, so the next line is quality data.
    InQuality,
}

impl State {
    /// Gets the state that follows `line` along with the number of bases the
    /// line contributes.
    ///
    /// The rules are checked in order and the first one to match wins:
    ///
    /// 1. A header line always starts a record.
    /// 2. Inside a sequence, the line is counted, whatever it looks like.
    /// 3. A separator line starts the quality data, even inside quality data.
    /// 4. Inside quality data, any other line is consumed.
    /// 5. Anything else is ignored.
    ///
    /// Empty lines leave the state as is and contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use fastq_count_bases::Line;
    /// use fastq_count_bases::State;
    ///
    /// let (state, bases) = State::Idle.transition(&Line::new(b"@r1"));
    /// assert_eq!((state, bases), (State::InSequence, 0));
    ///
    /// let (state, bases) = state.transition(&Line::new(b"ACGT"));
    /// assert_eq!((state, bases), (State::Idle, 4));
    /// ```
    pub fn transition(self, line: &Line<'_>) -> (State, u64) {
        match (self, line) {
            (state, Line::Empty) => (state, 0),
            (_, Line::Header(_)) => (State::InSequence, 0),
            (State::InSequence, line) => (State::Idle, line.len() as u64),
            (_, Line::Separator(_)) => (State::InQuality, 0),
            (State::InQuality, Line::Other(_)) => (State::Idle, 0),
            (State::Idle, Line::Other(_)) => (State::Idle, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lines_change_nothing() {
        for state in [State::Idle, State::InSequence, State::InQuality] {
            assert_eq!(state.transition(&Line::Empty), (state, 0));
        }
    }

    #[test]
    fn header_wins_in_every_state() {
        for state in [State::Idle, State::InSequence, State::InQuality] {
            assert_eq!(
                state.transition(&Line::new(b"@r1")),
                (State::InSequence, 0)
            );
        }
    }

    #[test]
    fn sequence_is_counted_whatever_it_looks_like() {
        let state = State::InSequence;
        assert_eq!(state.transition(&Line::new(b"ACGT")), (State::Idle, 4));
        assert_eq!(state.transition(&Line::new(b"+AC")), (State::Idle, 3));
    }

    #[test]
    fn separator_starts_quality() {
        assert_eq!(
            State::Idle.transition(&Line::new(b"+")),
            (State::InQuality, 0)
        );
    }

    #[test]
    fn separator_rule_comes_before_quality_rule() {
        assert_eq!(
            State::InQuality.transition(&Line::new(b"+FF")),
            (State::InQuality, 0)
        );
    }

    #[test]
    fn quality_is_consumed() {
        assert_eq!(
            State::InQuality.transition(&Line::new(b"FFFF")),
            (State::Idle, 0)
        );
    }

    #[test]
    fn out_of_place_lines_are_ignored() {
        assert_eq!(
            State::Idle.transition(&Line::new(b"ACGT")),
            (State::Idle, 0)
        );
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(State::default(), State::Idle);
    }
}

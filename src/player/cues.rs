// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Audio cues for particular display values.
//!
//! When the display settles on one of a couple of well known numbers a short
//! clip is played. This is purely cosmetic and has no influence on the
//! calculator itself.

use crate::config::SoundConfig;

const CUE_TOLERANCE: f64 = 0.0001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SoundCue {
    SixtySeven,
    EighteenEightyNine,
}

impl SoundCue {
    const ALL: [SoundCue; 2] = [SoundCue::SixtySeven, SoundCue::EighteenEightyNine];

    fn target(self) -> f64 {
        match self {
            SoundCue::SixtySeven => 67.0,
            SoundCue::EighteenEightyNine => 1889.0,
        }
    }

    /// Finds the cue, if any, triggered by a displayed value.
    pub(crate) fn for_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|cue| (value - cue.target()).abs() < CUE_TOLERANCE)
    }

    /// The configured clip for this cue.
    pub(crate) fn clip(self, sounds: &SoundConfig) -> Option<&str> {
        match self {
            SoundCue::SixtySeven => sounds.sixty_seven.as_deref(),
            SoundCue::EighteenEightyNine => sounds.eighteen_eighty_nine.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_value() {
        assert_eq!(SoundCue::for_value(67.0), Some(SoundCue::SixtySeven));
        assert_eq!(SoundCue::for_value(67.00005), Some(SoundCue::SixtySeven));
        assert_eq!(SoundCue::for_value(1889.0), Some(SoundCue::EighteenEightyNine));
        assert_eq!(SoundCue::for_value(67.001), None);
        assert_eq!(SoundCue::for_value(-67.0), None);
        assert_eq!(SoundCue::for_value(0.0), None);
    }

    #[test]
    fn test_clip() {
        let sounds = SoundConfig {
            sixty_seven: Some("/tmp/67.mp3".to_string()),
            eighteen_eighty_nine: None,
        };
        assert_eq!(SoundCue::SixtySeven.clip(&sounds), Some("/tmp/67.mp3"));
        assert_eq!(SoundCue::EighteenEightyNine.clip(&sounds), None);
    }
}

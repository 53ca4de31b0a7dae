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

//! Audio playback for display cues.
//!
//! This module provides the high-level [`AudioPlayer`] interface used by the
//! application to play cue clips. It manages a background worker thread that
//! interfaces with the underlying audio library (MPV), ensuring that audio
//! operations never block the main application thread.

mod commands;
mod cues;

use std::sync::mpsc;

use anyhow::Result;
use tracing::{debug, info};

use crate::{
    actions::events::AppEvent,
    config::SoundConfig,
    engine::Readout,
    player::commands::AudioPlayerCommand,
};

pub(crate) use cues::SoundCue;

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
    sounds: SoundConfig,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `sounds` - The configured cue clips.
    /// * `event_tx` - A channel to send application-level events (errors)
    ///   back to the main event loop.
    pub(crate) fn new(sounds: SoundConfig, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Self { command_tx, sounds }
    }

    /// Plays the cue matching a fresh readout, if there is one.
    ///
    /// Readouts showing an error never trigger a cue.
    pub(crate) fn cue_readout(&self, readout: &Readout) -> Result<()> {
        match readout.value.and_then(SoundCue::for_value) {
            Some(cue) => self.play_cue(cue),
            None => Ok(()),
        }
    }

    /// Plays the clip configured for a cue, doing nothing when none is set.
    pub(crate) fn play_cue(&self, cue: SoundCue) -> Result<()> {
        match cue.clip(&self.sounds) {
            Some(filename) => {
                info!(?cue, filename, "playing audio cue");
                self.play_file(filename)
            }
            None => {
                debug!(?cue, "no clip configured for audio cue");
                Ok(())
            }
        }
    }

    /// Instructs the worker to load and play a specific audio file.
    ///
    /// # Arguments
    ///
    /// * `filename` - The path to the audio file on disk.
    fn play_file(&self, filename: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::PlayFile(filename.to_string()))?;
        Ok(())
    }
}

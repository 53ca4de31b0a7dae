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

//! Audio playback worker.
//!
//! With the `audio` feature enabled the worker owns a `libmpv` handle and
//! plays each requested clip, replacing whatever was still playing. Without
//! the feature the worker only logs the clips it was asked to play.

use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::actions::events::AppEvent;

#[derive(Debug)]
pub(crate) enum AudioPlayerCommand {
    PlayFile(String),
}

/// Spawns the audio worker thread to process playback commands.
///
/// If the internal worker returns an error, it is caught here and broadcast as
/// an application error event. Audio is cosmetic, so the application keeps
/// running without it.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the player command channel.
/// * `event_tx` - The channel used to report worker failures.
pub(crate) fn spawn_player_worker(command_rx: Receiver<AudioPlayerCommand>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        if let Err(e) = audio_player_worker(command_rx) {
            let _ = event_tx.send(AppEvent::Error(format!("Audio worker failure: {:?}", e)));
        }
    });
}

/// The primary execution loop for the audio player backend.
///
/// Initializes a local `libmpv` context, then alternates between draining
/// pending commands and waiting briefly for MPV events. Returns once the
/// command channel is closed.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or a clip cannot be
/// loaded.
#[cfg(feature = "audio")]
fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>) -> Result<()> {
    use anyhow::Context;

    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("vo", "null")
            .context("Failed to set no video output")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    while process_commands(&mut handler, &command_rx)? {
        if let Some(mpv::Event::EndFile(Ok(_))) = handler.wait_event(0.05) {
            tracing::debug!("audio cue finished");
        }
    }

    Ok(())
}

/// Drains and executes all pending commands, returning `false` once the
/// application has dropped its end of the channel.
#[cfg(feature = "audio")]
fn process_commands(handler: &mut mpv::MpvHandler, command_rx: &Receiver<AudioPlayerCommand>) -> Result<bool> {
    use anyhow::Context;
    use std::sync::mpsc::TryRecvError;

    loop {
        match command_rx.try_recv() {
            Ok(AudioPlayerCommand::PlayFile(filename)) => {
                handler
                    .command(&["loadfile", &filename, "replace"])
                    .context(format!("Failed to load file: {}", &filename))?;
                handler.set_property("pause", false)?;
            }
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        }
    }
}

#[cfg(not(feature = "audio"))]
fn audio_player_worker(command_rx: Receiver<AudioPlayerCommand>) -> Result<()> {
    while let Ok(command) = command_rx.recv() {
        match command {
            AudioPlayerCommand::PlayFile(filename) => {
                tracing::info!(%filename, "audio support not built in, skipping cue");
            }
        }
    }

    Ok(())
}

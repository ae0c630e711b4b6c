use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, error, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::game::GameEvent;

/// Logical sound effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SoundType {
    Boom,
    ShipHit,
    LevelUp,
    Powerup,
}

impl SoundType {
    /// Effect for a game event, if it has one.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Boom => Some(SoundType::Boom),
            GameEvent::ShipHit | GameEvent::ShieldDown | GameEvent::GameOver => {
                Some(SoundType::ShipHit)
            }
            GameEvent::LevelUp { .. } | GameEvent::Won => Some(SoundType::LevelUp),
            GameEvent::PowerupCollected(_) => Some(SoundType::Powerup),
        }
    }
}

/// Message sent from the main thread to the audio thread.
pub enum Message {
    Play(SoundType),
    Music(bool),
}

pub struct SoundInfo {
    pub sound_type: SoundType,
    pub path: &'static str,
}

impl SoundInfo {
    const fn new(sound_type: SoundType, path: &'static str) -> Self {
        Self { sound_type, path }
    }
}

/// Paths are relative to the workspace root, where the game is expected to run.
pub const ALL_SOUNDS: &[SoundInfo] = &[
    SoundInfo::new(SoundType::Boom, "assets/sounds/explosion.wav"),
    SoundInfo::new(SoundType::ShipHit, "assets/sounds/ship_hit.wav"),
    SoundInfo::new(SoundType::LevelUp, "assets/sounds/levelup.wav"),
    SoundInfo::new(SoundType::Powerup, "assets/sounds/powerup.wav"),
];

pub const MUSIC_PATH: &str = "assets/sounds/bg_music.ogg";
const MUSIC_VOLUME: f32 = 0.5;

struct SoundThread {
    receiver: Receiver<Message>,
    sound_files: HashMap<SoundType, Vec<u8>>,
    music: Option<Vec<u8>>,
}

impl SoundThread {
    fn new(receiver: Receiver<Message>) -> Option<Self> {
        let mut sound_files = HashMap::new();
        for info in ALL_SOUNDS.iter() {
            match fs::read(info.path) {
                Ok(bytes) => {
                    sound_files.insert(info.sound_type, bytes);
                }
                Err(e) => {
                    warn!(
                        "Failed to load sound {:?} from {}: {e}",
                        info.sound_type, info.path
                    );
                }
            }
        }

        let music = match fs::read(MUSIC_PATH) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Failed to load background music from {MUSIC_PATH}: {e}");
                None
            }
        };

        if sound_files.is_empty() && music.is_none() {
            warn!("No sound files could be loaded, disabling audio");
            return None;
        }

        Some(Self {
            receiver,
            sound_files,
            music,
        })
    }

    fn run(self) {
        // Keep the stream alive as long as the audio thread runs.
        let Ok((_stream, stream_handle)) = OutputStream::try_default() else {
            error!("Failed to open default audio output stream, disabling audio");
            return;
        };

        let music_sink = self.start_music(&stream_handle);

        loop {
            match self.receiver.recv() {
                Ok(Message::Play(sound_type)) => self.play(&stream_handle, sound_type),
                Ok(Message::Music(on)) => {
                    if let Some(sink) = &music_sink {
                        if on {
                            sink.play();
                        } else {
                            sink.pause();
                        }
                    }
                }
                Err(e) => {
                    debug!("Audio channel closed: {e}");
                    break;
                }
            }
        }
    }

    /// Loop the background music on its own sink.
    fn start_music(&self, stream_handle: &OutputStreamHandle) -> Option<Sink> {
        let bytes = self.music.clone()?;
        let sink = match Sink::try_new(stream_handle) {
            Ok(sink) => sink,
            Err(e) => {
                error!("Failed to create music sink: {e}");
                return None;
            }
        };
        match Decoder::new(Cursor::new(bytes)) {
            Ok(source) => {
                sink.set_volume(MUSIC_VOLUME);
                sink.append(source.repeat_infinite());
                Some(sink)
            }
            Err(e) => {
                error!("Failed to decode background music: {e}");
                None
            }
        }
    }

    /// Effects are mixed on top of each other rather than queued.
    fn play(&self, stream_handle: &OutputStreamHandle, sound_type: SoundType) {
        let Some(bytes) = self.sound_files.get(&sound_type) else {
            debug!("No audio data for sound {sound_type:?}");
            return;
        };
        match Decoder::new(Cursor::new(bytes.clone())) {
            Ok(source) => {
                if let Err(e) = stream_handle.play_raw(source.convert_samples()) {
                    error!("Failed to play sound {sound_type:?}: {e}");
                }
            }
            Err(e) => {
                error!("Failed to decode sound {sound_type:?}: {e}");
            }
        }
    }
}

/// Main-thread handle to the audio thread.
pub struct SoundManager {
    sender: Sender<Message>,
}

impl SoundManager {
    /// Try to start the audio thread.
    ///
    /// Returns `None` when no sound could be loaded or the thread could not be
    /// spawned; the game then runs silently.
    pub fn new() -> Option<Self> {
        let (sender, receiver) = mpsc::channel::<Message>();

        let sound_thread = SoundThread::new(receiver)?;

        if let Err(e) = thread::Builder::new()
            .name("alien_invasion_sound".into())
            .spawn(move || sound_thread.run())
        {
            error!("Failed to spawn audio thread: {e}");
            return None;
        }

        Some(Self { sender })
    }

    pub fn play(&self, sound_type: SoundType) {
        // If the audio thread has gone away we simply stop playing sounds.
        let _ = self.sender.send(Message::Play(sound_type));
    }

    pub fn set_music(&self, on: bool) {
        let _ = self.sender.send(Message::Music(on));
    }

    pub fn handle_events(&self, events: &[GameEvent]) {
        for sound_type in events.iter().filter_map(SoundType::for_event) {
            self.play(sound_type);
        }
    }
}

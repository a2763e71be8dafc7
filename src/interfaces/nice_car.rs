use std::io::{self, Write};

use super::{CdPlayer, Media};

/// Has-a media player instead of being one, so `Media::start` never
/// collides with anything an engine would declare.
pub struct NiceCar {
    player: Box<dyn Media>,
}

impl NiceCar {
    pub fn new() -> Self {
        log::debug!("NiceCar: binding a CdPlayer");
        Self::with_player(Box::new(CdPlayer))
    }

    fn with_player(player: Box<dyn Media>) -> Self {
        NiceCar { player }
    }

    pub fn start_music(&self, out: &mut dyn Write) -> io::Result<()> {
        self.player.start(out)
    }

    pub fn stop_music(&self, out: &mut dyn Write) -> io::Result<()> {
        self.player.stop(out)
    }
}

impl Default for NiceCar {
    fn default() -> Self {
        Self::new()
    }
}

/// Text-to-speech narration per slide.
pub mod narrate;
/// Optional pitch/tempo/phaser filter over narration files.
pub mod voice;
/// WAV header probing.
pub mod wav;

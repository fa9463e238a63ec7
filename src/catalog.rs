// Sample catalogue of generated audio files and available voice models

use rustc_hash::FxHashMap;

/// Text-to-speech models offered by the audio model selector
pub const AUDIO_MODELS: [&str; 5] = [
    "OpenAI TTS-1",
    "OpenAI TTS-1-HD",
    "ElevenLabs Multilingual",
    "Azure Neural Voice",
    "Google Cloud TTS",
];

const SAMPLE_TRANSCRIPTS: [&str; 4] = [
    "This is a sample transcript for the generated audio content. It shows what was spoken in the audio file and provides context for the generated speech.",
    "Another example transcript showing different content that might be generated from your video source. This demonstrates varied speech patterns.",
    "Here's a third variation of transcript text to demonstrate how different audio files would have unique content and speaking styles.",
    "Final sample transcript showing how the text content varies across different generated audio files with distinct messaging.",
];

// (duration, size) for each sample row
const SAMPLE_ROWS: [(&str, &str); 20] = [
    ("2:34", "3.2 MB"),
    ("1:45", "2.1 MB"),
    ("3:12", "4.5 MB"),
    ("2:01", "2.8 MB"),
    ("1:58", "2.7 MB"),
    ("2:45", "3.8 MB"),
    ("1:32", "2.3 MB"),
    ("3:05", "4.2 MB"),
    ("2:18", "3.1 MB"),
    ("1:55", "2.6 MB"),
    ("2:42", "3.5 MB"),
    ("1:38", "2.4 MB"),
    ("3:21", "4.7 MB"),
    ("2:15", "3.0 MB"),
    ("1:49", "2.5 MB"),
    ("2:56", "4.0 MB"),
    ("1:27", "2.2 MB"),
    ("3:08", "4.3 MB"),
    ("2:33", "3.4 MB"),
    ("1:52", "2.8 MB"),
];

/// One generated audio file row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFile {
    pub id: u32,
    pub name: String,
    pub duration: String,
    pub size: String,
}

impl AudioFile {
    /// Secondary line shown under the file name
    pub fn details(&self) -> String {
        format!("{} • {}", self.duration, self.size)
    }
}

/// Read-only list of audio files with an id index
#[derive(Debug, Clone)]
pub struct AudioCatalog {
    files: Vec<AudioFile>,
    by_id: FxHashMap<u32, usize>,
}

impl AudioCatalog {
    pub fn new(files: Vec<AudioFile>) -> Self {
        let by_id = files
            .iter()
            .enumerate()
            .map(|(index, file)| (file.id, index))
            .collect();
        AudioCatalog { files, by_id }
    }

    /// The twenty built-in sample rows
    pub fn sample() -> Self {
        let files = SAMPLE_ROWS
            .iter()
            .enumerate()
            .map(|(index, (duration, size))| {
                let id = index as u32 + 1;
                AudioFile {
                    id,
                    name: format!("brainrot_audio_{}.mp3", id),
                    duration: duration.to_string(),
                    size: size.to_string(),
                }
            })
            .collect();
        AudioCatalog::new(files)
    }

    pub fn files(&self) -> &[AudioFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&AudioFile> {
        self.by_id.get(&id).map(|&index| &self.files[index])
    }

    /// Transcript paired with the row at `index`
    pub fn transcript(index: usize) -> &'static str {
        SAMPLE_TRANSCRIPTS[index % SAMPLE_TRANSCRIPTS.len()]
    }
}

impl Default for AudioCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

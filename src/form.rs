//! Video configuration form model
//!
//! A flat record of everything the user can set before generating. Edits are
//! applied one field at a time; the only checks happen in
//! [`FormModel::to_request`], which requires the numeric fields to be
//! positive integers.

use serde::{Deserialize, Serialize};

use crate::catalog::AUDIO_MODELS;
use crate::error::FieldError;

/// Editing behaviour of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultiLine,
    /// Digits only
    Numeric,
    Select,
    Toggle,
}

/// Identifies one form field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    SourceUrl,
    Width,
    Height,
    MaxLength,
    AudioModel,
    VideoTitle,
    VideoDescription,
    UseImageInIntro,
}

impl FormField {
    pub const ALL: [FormField; 8] = [
        FormField::SourceUrl,
        FormField::Width,
        FormField::Height,
        FormField::MaxLength,
        FormField::AudioModel,
        FormField::VideoTitle,
        FormField::VideoDescription,
        FormField::UseImageInIntro,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::SourceUrl => "Source URL",
            FormField::Width => "Width",
            FormField::Height => "Height",
            FormField::MaxLength => "Max Length (seconds)",
            FormField::AudioModel => "Audio Model",
            FormField::VideoTitle => "Video Title",
            FormField::VideoDescription => "Video Description",
            FormField::UseImageInIntro => "Use image in intro",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::SourceUrl => "https://example.com/video",
            FormField::Width => "1080",
            FormField::Height => "1920",
            FormField::MaxLength => "60",
            FormField::AudioModel => "Select an audio model",
            FormField::VideoTitle => "Enter video title",
            FormField::VideoDescription => "Enter video description",
            FormField::UseImageInIntro => "",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FormField::SourceUrl | FormField::VideoTitle => FieldKind::Text,
            FormField::VideoDescription => FieldKind::MultiLine,
            FormField::Width | FormField::Height | FormField::MaxLength => FieldKind::Numeric,
            FormField::AudioModel => FieldKind::Select,
            FormField::UseImageInIntro => FieldKind::Toggle,
        }
    }

    fn position(self) -> usize {
        FormField::ALL
            .iter()
            .position(|f| *f == self)
            .unwrap_or_default()
    }

    /// Next field in display order, wrapping
    pub fn next(self) -> Self {
        FormField::ALL[(self.position() + 1) % FormField::ALL.len()]
    }

    /// Previous field in display order, wrapping
    pub fn prev(self) -> Self {
        let len = FormField::ALL.len();
        FormField::ALL[(self.position() + len - 1) % len]
    }
}

/// Current form contents.
///
/// Numeric fields are kept as text so partially typed values survive until
/// the form is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormModel {
    pub source_url: String,
    pub width: String,
    pub height: String,
    pub max_length: String,
    pub audio_model: Option<String>,
    pub video_title: String,
    pub video_description: String,
    pub use_image_in_intro: bool,
}

impl Default for FormModel {
    fn default() -> Self {
        FormModel {
            source_url: String::new(),
            width: "1080".to_string(),
            height: "1920".to_string(),
            max_length: "60".to_string(),
            audio_model: None,
            video_title: String::new(),
            video_description: String::new(),
            use_image_in_intro: false,
        }
    }
}

impl FormModel {
    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::SourceUrl => Some(&mut self.source_url),
            FormField::Width => Some(&mut self.width),
            FormField::Height => Some(&mut self.height),
            FormField::MaxLength => Some(&mut self.max_length),
            FormField::VideoTitle => Some(&mut self.video_title),
            FormField::VideoDescription => Some(&mut self.video_description),
            FormField::AudioModel | FormField::UseImageInIntro => None,
        }
    }

    /// Display text for a field; empty when unset
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::SourceUrl => self.source_url.clone(),
            FormField::Width => self.width.clone(),
            FormField::Height => self.height.clone(),
            FormField::MaxLength => self.max_length.clone(),
            FormField::AudioModel => self.audio_model.clone().unwrap_or_default(),
            FormField::VideoTitle => self.video_title.clone(),
            FormField::VideoDescription => self.video_description.clone(),
            FormField::UseImageInIntro => {
                let state = if self.use_image_in_intro { "on" } else { "off" };
                state.to_string()
            }
        }
    }

    /// Replace a text field wholesale. Returns `false` for non-text fields
    /// and for numeric fields given anything but digits.
    pub fn set_text(&mut self, field: FormField, value: &str) -> bool {
        if field.kind() == FieldKind::Numeric && !value.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        match self.text_mut(field) {
            Some(slot) => {
                *slot = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Append one typed character to a text field
    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        let accepted = match field.kind() {
            FieldKind::Numeric => c.is_ascii_digit(),
            FieldKind::Text => !c.is_control(),
            FieldKind::MultiLine => c == '\n' || !c.is_control(),
            FieldKind::Select | FieldKind::Toggle => false,
        };
        if !accepted {
            return false;
        }
        match self.text_mut(field) {
            Some(slot) => {
                slot.push(c);
                true
            }
            None => false,
        }
    }

    /// Delete the last character of a text field
    pub fn backspace(&mut self, field: FormField) -> bool {
        self.text_mut(field).is_some_and(|slot| slot.pop().is_some())
    }

    pub fn toggle_intro_image(&mut self) {
        self.use_image_in_intro = !self.use_image_in_intro;
    }

    /// Choose an audio model by name. Unknown names are rejected.
    pub fn select_audio_model(&mut self, name: &str) -> bool {
        match AUDIO_MODELS.iter().find(|m| **m == name) {
            Some(model) => {
                self.audio_model = Some(model.to_string());
                true
            }
            None => false,
        }
    }

    /// Step to the next audio model, starting from the first when unset
    pub fn cycle_audio_model(&mut self) {
        let next = match &self.audio_model {
            Some(current) => AUDIO_MODELS
                .iter()
                .position(|m| *m == current.as_str())
                .map_or(0, |i| (i + 1) % AUDIO_MODELS.len()),
            None => 0,
        };
        self.audio_model = Some(AUDIO_MODELS[next].to_string());
    }

    /// Width and height when both parse as positive integers
    pub fn aspect_ratio(&self) -> Option<(u32, u32)> {
        let width = self.width.trim().parse::<u32>().ok().filter(|w| *w > 0)?;
        let height = self.height.trim().parse::<u32>().ok().filter(|h| *h > 0)?;
        Some((width, height))
    }

    /// Validate and freeze the form into a request
    pub fn to_request(&self) -> Result<GenerateRequest, FieldError> {
        Ok(GenerateRequest {
            source_url: self.source_url.trim().to_string(),
            width: positive_integer(FormField::Width, &self.width)?,
            height: positive_integer(FormField::Height, &self.height)?,
            max_length: positive_integer(FormField::MaxLength, &self.max_length)?,
            audio_model: self.audio_model.clone(),
            video_title: self.video_title.clone(),
            video_description: self.video_description.clone(),
            intro_image: self.use_image_in_intro,
        })
    }
}

fn positive_integer(field: FormField, raw: &str) -> Result<u32, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldError::Empty(field));
    }
    let value = raw.parse::<u32>().map_err(|_| FieldError::NotAnInteger {
        field,
        value: raw.to_string(),
    })?;
    if value == 0 {
        return Err(FieldError::NotPositive(field));
    }
    Ok(value)
}

/// Validated form snapshot handed to the generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub source_url: String,
    pub width: u32,
    pub height: u32,
    pub max_length: u32,
    pub audio_model: Option<String>,
    pub video_title: String,
    pub video_description: String,
    pub intro_image: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(FormField::SourceUrl.prev(), FormField::UseImageInIntro);
        assert_eq!(FormField::UseImageInIntro.next(), FormField::SourceUrl);
        assert_eq!(FormField::Width.next(), FormField::Height);
    }

    #[test]
    fn test_numeric_rejects_letters() {
        let mut form = FormModel::default();
        assert!(!form.insert_char(FormField::Width, 'x'));
        assert!(form.insert_char(FormField::Width, '0'));
        assert_eq!(form.width, "10800");
        assert!(!form.set_text(FormField::Height, "12a"));
        assert_eq!(form.height, "1920");
    }

    #[test]
    fn test_cycle_audio_model_wraps() {
        let mut form = FormModel::default();
        form.cycle_audio_model();
        assert_eq!(form.audio_model.as_deref(), Some(AUDIO_MODELS[0]));
        for _ in 0..AUDIO_MODELS.len() {
            form.cycle_audio_model();
        }
        assert_eq!(form.audio_model.as_deref(), Some(AUDIO_MODELS[0]));
    }
}

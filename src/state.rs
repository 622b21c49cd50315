//! Runtime state of the profile page outside the slideshow.

use crate::color::HexColor;
use crate::dark_mode::DarkMode;
use crate::profile::age::AgeOutcome;
use crate::profile::customize::FontSize;
use crate::profile::picture::ProfilePicture;
use crate::profile::quotes::QuoteBox;
use crate::profile::skills::SkillList;
use crate::profile::validation::{ContactForm, Feedback};
use crate::settings::AppSettings;

/// In-memory state that drives the page widgets.
#[derive(Debug)]
pub struct ProfileState {
    /// Shared dark-mode flag.
    pub dark_mode: DarkMode,
    /// Base font size.
    pub font_size: FontSize,
    pub name: String,
    /// Editable job title.
    pub job_title: String,
    /// Draft of the job title while editing.
    pub job_title_draft: Option<String>,
    pub skills: SkillList,
    pub form: ContactForm,
    /// Latest validation or submit message.
    pub feedback: Option<Feedback>,
    pub message_max_length: usize,
    /// Raw birth-year input.
    pub birth_year: String,
    pub age: AgeOutcome,
    pub quotes: QuoteBox,
    pub picture: ProfilePicture,
    /// Color picker values.
    pub background_pick: HexColor,
    pub text_pick: HexColor,
}

impl ProfileState {
    /// Build the runtime state from loaded settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        let profile = &settings.profile;
        let first = settings.slides.first().map(|slide| slide.scheme);
        Self {
            dark_mode: DarkMode::new(settings.dark_mode),
            font_size: FontSize::new(settings.font_size),
            name: profile.name.clone(),
            job_title: profile.job_title.clone(),
            job_title_draft: None,
            skills: SkillList::new(profile.skills.clone()),
            form: ContactForm::default(),
            feedback: None,
            message_max_length: profile.message_max_length,
            birth_year: String::new(),
            age: AgeOutcome::Empty,
            quotes: QuoteBox::from_entropy(),
            picture: ProfilePicture::new(settings.picture_sources(), settings.timing().fade_delay),
            background_pick: first.map_or(HexColor::WHITE, |scheme| scheme.background),
            text_pick: first.map_or(HexColor::new(0, 0, 0), |scheme| scheme.text),
        }
    }

    /// Commit the job title draft when it is not blank.
    pub fn commit_job_title(&mut self) {
        if let Some(draft) = self.job_title_draft.take() {
            let trimmed = draft.trim();
            if !trimmed.is_empty() {
                self.job_title = trimmed.to_string();
            }
        }
    }

    /// Re-evaluate the age line for `current_year`.
    pub fn update_age(&mut self, current_year: i32) {
        self.age = AgeOutcome::evaluate(&self.birth_year, current_year);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_from_settings() {
        let settings = AppSettings {
            dark_mode: true,
            font_size: 30,
            ..AppSettings::default()
        };
        let state = ProfileState::from_settings(&settings);
        assert!(state.dark_mode.is_active());
        assert_eq!(state.font_size.px(), 24);
        assert_eq!(state.skills.heading(), "Skills (5)");
        assert_eq!(state.background_pick, settings.slides[0].scheme.background);
        assert_eq!(state.picture.current_source(), Some("2x2.jpg"));
    }

    #[test]
    fn blank_job_title_is_ignored() {
        let mut state = ProfileState::from_settings(&AppSettings::default());
        state.job_title_draft = Some("   ".into());
        state.commit_job_title();
        assert_eq!(state.job_title, "Web Developer");
        state.job_title_draft = Some("  Engineer ".into());
        state.commit_job_title();
        assert_eq!(state.job_title, "Engineer");
        assert!(state.job_title_draft.is_none());
    }
}

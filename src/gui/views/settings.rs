//! Settings panel: edit and persist the default download folder

use crate::gui::theme;
use crate::gui::views::display_folder;
use crate::utils::{Configuration, MediagrabError, SettingsStore};
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length};
use tracing::error;

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    FolderEdited(String),
    /// Open the folder picker (handled by the shell)
    BrowseFolder,
    FolderChosen(String),
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    Failed(String),
}

/// The only component allowed to write the configuration
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    store: SettingsStore,
    folder_field: String,
    status: Option<SaveStatus>,
}

impl SettingsPanel {
    pub fn new(store: SettingsStore, config: &Configuration) -> Self {
        Self {
            store,
            folder_field: display_folder(config.default_download_folder.as_deref()).to_string(),
            status: None,
        }
    }

    pub fn folder_field(&self) -> &str {
        &self.folder_field
    }

    pub fn status(&self) -> Option<&SaveStatus> {
        self.status.as_ref()
    }

    /// Updates the displayed value only; nothing is persisted until [`save`](Self::save).
    pub fn choose_folder(&mut self, path: impl Into<String>) {
        self.folder_field = path.into();
        self.status = None;
    }

    /// Persist the field's text as-is. The path is not checked for existence.
    pub fn save(&mut self) -> Result<Configuration, MediagrabError> {
        let config = Configuration::with_folder(self.folder_field.clone());

        match self.store.save(&config) {
            Ok(()) => {
                self.status = Some(SaveStatus::Saved);
                Ok(config)
            }
            Err(e) => {
                error!("{}", e);
                self.status = Some(SaveStatus::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Returns the new configuration when a save succeeded
    pub fn update(&mut self, message: SettingsMessage) -> Option<Configuration> {
        match message {
            SettingsMessage::FolderEdited(value) | SettingsMessage::FolderChosen(value) => {
                self.choose_folder(value);
                None
            }
            SettingsMessage::Save => self.save().ok(),
            SettingsMessage::BrowseFolder => None,
        }
    }

    pub fn view(&self) -> Element<'_, SettingsMessage> {
        let folder_row = row![
            text_input("Enter default download folder", &self.folder_field)
                .on_input(SettingsMessage::FolderEdited)
                .padding(10)
                .width(Length::Fixed(300.0)),
            button(text("Browse...").size(14))
                .on_press(SettingsMessage::BrowseFolder)
                .padding([8, 16])
                .style(iced::theme::Button::Secondary),
        ]
        .spacing(20)
        .align_items(Alignment::Center);

        let status: Element<'_, SettingsMessage> = match &self.status {
            None => text("").into(),
            Some(SaveStatus::Saved) => text("Settings saved").style(theme::SUCCESS).into(),
            Some(SaveStatus::Failed(e)) => text(e).style(theme::DANGER).into(),
        };

        let save_button = button(text("Save"))
            .on_press(SettingsMessage::Save)
            .padding([8, 16])
            .width(Length::Fixed(300.0))
            .style(iced::theme::Button::Primary);

        let content = column![
            text("Default download folder").size(16),
            folder_row,
            Space::with_height(Length::Fill),
            status,
            save_button,
        ]
        .spacing(12)
        .padding(20)
        .align_items(Alignment::Start);

        container(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(iced::theme::Container::Custom(Box::new(theme::PanelContainer))),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::views::UNSET_FOLDER_PLACEHOLDER;
    use crate::utils::config::CONFIG_FILE_NAME;
    use tempfile::tempdir;

    #[test]
    fn test_unset_folder_renders_placeholder() {
        let dir = tempdir().unwrap();
        let panel = SettingsPanel::new(
            SettingsStore::new(dir.path().join(CONFIG_FILE_NAME)),
            &Configuration::default(),
        );
        assert_eq!(panel.folder_field(), UNSET_FOLDER_PLACEHOLDER);
    }

    #[test]
    fn test_choose_folder_does_not_persist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let mut panel = SettingsPanel::new(SettingsStore::new(&path), &Configuration::default());

        panel.update(SettingsMessage::FolderChosen("/downloads".to_string()));

        assert_eq!(panel.folder_field(), "/downloads");
        assert!(!path.exists());
    }

    #[test]
    fn test_save_persists_field_verbatim() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join(CONFIG_FILE_NAME));
        let mut panel = SettingsPanel::new(store.clone(), &Configuration::default());

        panel.update(SettingsMessage::FolderEdited("/downloads".to_string()));
        let saved = panel.update(SettingsMessage::Save);

        assert_eq!(saved, Some(Configuration::with_folder("/downloads")));
        assert_eq!(panel.status(), Some(&SaveStatus::Saved));
        assert_eq!(store.load(), Configuration::with_folder("/downloads"));
    }

    #[test]
    fn test_saving_untouched_placeholder_stores_it() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join(CONFIG_FILE_NAME));
        let mut panel = SettingsPanel::new(store.clone(), &Configuration::default());

        panel.save().unwrap();

        assert_eq!(
            store.load(),
            Configuration::with_folder(UNSET_FOLDER_PLACEHOLDER)
        );
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let mut panel = SettingsPanel::new(
            SettingsStore::new(blocker.join(CONFIG_FILE_NAME)),
            &Configuration::default(),
        );

        assert!(panel.update(SettingsMessage::Save).is_none());
        assert!(matches!(panel.status(), Some(SaveStatus::Failed(_))));
    }
}

//! Home panel: URL, destination folder and audio/video choice

use crate::downloader::{DownloadMode, DownloadRequest};
use crate::gui::clipboard;
use crate::gui::theme;
use crate::gui::views::display_folder;
use crate::utils::Configuration;
use iced::widget::{button, column, container, radio, row, text, text_input, Column};
use iced::{Alignment, Element, Length};
use tracing::{debug, warn};

/// Readiness of the panel, derived from whether a folder and a mode are set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeState {
    Idle,
    FolderChosen,
    ModeChosen,
    Ready,
}

impl HomeState {
    pub fn from_selection(has_folder: bool, has_mode: bool) -> Self {
        match (has_folder, has_mode) {
            (false, false) => HomeState::Idle,
            (true, false) => HomeState::FolderChosen,
            (false, true) => HomeState::ModeChosen,
            (true, true) => HomeState::Ready,
        }
    }
}

#[derive(Debug, Clone)]
pub enum HomeMessage {
    UrlChanged(String),
    /// Open the folder picker (handled by the shell)
    BrowseFolder,
    FolderChosen(String),
    ModeChosen(DownloadMode),
    PasteUrl,
    /// Start a download (handled by the shell)
    DownloadPressed,
    DownloadFinished(Result<String, String>),
}

/// Outcome of the most recent download
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadStatus {
    /// URL of the download in flight
    Running(String),
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct HomePanel {
    url: String,
    folder: Option<String>,
    mode: Option<DownloadMode>,
    status: Option<DownloadStatus>,
}

impl HomePanel {
    pub fn new(config: &Configuration) -> Self {
        Self {
            url: String::new(),
            folder: config
                .default_download_folder
                .clone()
                .filter(|f| !f.is_empty()),
            mode: None,
            status: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }

    pub fn mode(&self) -> Option<DownloadMode> {
        self.mode
    }

    pub fn status(&self) -> Option<&DownloadStatus> {
        self.status.as_ref()
    }

    pub fn state(&self) -> HomeState {
        HomeState::from_selection(self.folder.is_some(), self.mode.is_some())
    }

    pub fn is_downloading(&self) -> bool {
        matches!(self.status, Some(DownloadStatus::Running(_)))
    }

    /// Download button is enabled only when Ready and nothing is in flight
    pub fn can_download(&self) -> bool {
        self.state() == HomeState::Ready && !self.is_downloading()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// An empty path clears the folder
    pub fn choose_folder(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug!("Home folder set to {:?}", path);
        self.folder = Some(path).filter(|p| !p.is_empty());
    }

    pub fn choose_mode(&mut self, mode: DownloadMode) {
        debug!("Download mode set to {}", mode);
        self.mode = Some(mode);
    }

    /// Pick up a newly saved default folder unless the user already chose one
    pub fn adopt_default_folder(&mut self, config: &Configuration) {
        if self.folder.is_none() {
            if let Some(folder) = &config.default_download_folder {
                self.choose_folder(folder.clone());
            }
        }
    }

    /// Request for the current inputs, or `None` outside the Ready state
    pub fn download_request(&self) -> Option<DownloadRequest> {
        if self.state() != HomeState::Ready {
            return None;
        }
        DownloadRequest::new(self.url.clone(), self.folder.clone()?, self.mode)
    }

    /// Mark a download as in flight and hand back its request.
    /// Returns `None` if the download action is currently disabled.
    pub fn begin_download(&mut self) -> Option<DownloadRequest> {
        if !self.can_download() {
            return None;
        }
        let request = self.download_request()?;
        self.status = Some(DownloadStatus::Running(request.url.clone()));
        Some(request)
    }

    /// Record the result. The URL, folder and mode are left as they were.
    pub fn finish_download(&mut self, result: Result<String, String>) {
        self.status = Some(match result {
            Ok(title) => DownloadStatus::Succeeded(title),
            Err(e) => DownloadStatus::Failed(e),
        });
    }

    pub fn update(&mut self, message: HomeMessage) {
        match message {
            HomeMessage::UrlChanged(url) => self.set_url(url),
            HomeMessage::FolderChosen(path) => self.choose_folder(path),
            HomeMessage::ModeChosen(mode) => self.choose_mode(mode),
            HomeMessage::PasteUrl => match clipboard::get_clipboard_text() {
                Ok(content) => self.url = content,
                Err(e) => warn!("{}", e),
            },
            HomeMessage::DownloadFinished(result) => self.finish_download(result),
            HomeMessage::BrowseFolder | HomeMessage::DownloadPressed => {}
        }
    }

    pub fn view(&self) -> Element<'_, HomeMessage> {
        let folder_label = text(format!("Current folder: {}", display_folder(self.folder())))
            .size(15);

        let folder_button = button(text("Choose folder"))
            .on_press(HomeMessage::BrowseFolder)
            .padding([8, 16])
            .width(Length::Fixed(300.0));

        let url_row = row![
            text_input("Enter URL here", &self.url)
                .on_input(HomeMessage::UrlChanged)
                .padding(10)
                .width(Length::Fixed(300.0)),
            button(text("Paste").size(14))
                .on_press(HomeMessage::PasteUrl)
                .padding([8, 12])
                .style(iced::theme::Button::Secondary),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        let modes = Column::with_children(
            DownloadMode::ALL
                .iter()
                .map(|mode| {
                    radio(mode.label(), *mode, self.mode, HomeMessage::ModeChosen).into()
                })
                .collect::<Vec<_>>(),
        )
        .spacing(10);

        let download_button = button(text(if self.is_downloading() {
            "Downloading..."
        } else {
            "Download"
        }))
        .on_press_maybe(self.can_download().then_some(HomeMessage::DownloadPressed))
        .padding([8, 16])
        .width(Length::Fixed(300.0))
        .style(iced::theme::Button::Primary);

        let status: Element<'_, HomeMessage> = match &self.status {
            None => text("").into(),
            Some(DownloadStatus::Running(url)) => {
                text(format!("Downloading {}...", url)).style(theme::MUTED).into()
            }
            Some(DownloadStatus::Succeeded(title)) => {
                text(format!("Downloaded: {}", title)).style(theme::SUCCESS).into()
            }
            Some(DownloadStatus::Failed(e)) => text(e).style(theme::DANGER).into(),
        };

        let content = column![
            folder_label,
            folder_button,
            url_row,
            modes,
            download_button,
            status
        ]
        .spacing(16)
        .padding(20)
        .align_items(Alignment::Center);

        container(
            container(content)
                .width(Length::Fill)
                .center_x()
                .style(iced::theme::Container::Custom(Box::new(theme::PanelContainer))),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
    }
}

//! Main GUI application

use crate::downloader::DownloadInvoker;
use crate::gui::theme::{self, AppearanceMode};
use crate::gui::views::{HomeMessage, HomePanel, SettingsMessage, SettingsPanel};
use crate::utils::{Configuration, MediagrabError, SettingsStore};
use iced::widget::{button, column, container, pick_list, row, text, Space};
use iced::{window, Application, Command, Element, Length, Settings, Size, Theme};
use tracing::{debug, error, info};

/// Everything the shell needs at startup
#[derive(Debug, Clone)]
pub struct AppFlags {
    pub store: SettingsStore,
    pub invoker: DownloadInvoker,
}

/// Application shell: owns the configuration snapshot and both panels
pub struct MediagrabApp {
    config: Configuration,
    invoker: DownloadInvoker,

    // UI State
    current_view: View,
    appearance: AppearanceMode,

    home: HomePanel,
    settings: SettingsPanel,
}

/// Application view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Settings,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // View navigation
    SwitchToHome,
    SwitchToSettings,
    AppearanceChanged(AppearanceMode),

    // Panels
    Home(HomeMessage),
    Settings(SettingsMessage),
}

impl MediagrabApp {
    pub fn current_view(&self) -> View {
        self.current_view
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn home(&self) -> &HomePanel {
        &self.home
    }

    pub fn settings(&self) -> &SettingsPanel {
        &self.settings
    }

    pub fn appearance(&self) -> AppearanceMode {
        self.appearance
    }

    fn start_download(&mut self) -> Command<Message> {
        let request = match self.home.begin_download() {
            Some(request) => request,
            None if self.home.is_downloading() => {
                debug!("Download already in flight, ignoring");
                return Command::none();
            }
            None => {
                // The button is only enabled in the Ready state
                error!("{}", MediagrabError::InvalidMode);
                debug_assert!(false, "download triggered outside the Ready state");
                return Command::none();
            }
        };

        let invoker = self.invoker.clone();
        Command::perform(
            async move { invoker.download(request).await.map_err(|e| e.to_string()) },
            |result| Message::Home(HomeMessage::DownloadFinished(result)),
        )
    }

    fn nav_button(&self, label: &'static str, target: View) -> Element<'static, Message> {
        let style = if self.current_view == target {
            theme::SidebarButtonStyle::Active
        } else {
            theme::SidebarButtonStyle::Inactive
        };

        button(text(label).size(16))
            .style(iced::theme::Button::Custom(Box::new(style)))
            .width(Length::Fill)
            .padding(12)
            .on_press(match target {
                View::Home => Message::SwitchToHome,
                View::Settings => Message::SwitchToSettings,
            })
            .into()
    }
}

impl Application for MediagrabApp {
    type Executor = iced::executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = AppFlags;

    fn new(flags: Self::Flags) -> (Self, Command<Message>) {
        let config = flags.store.load();
        info!(
            "Starting with default folder {:?}",
            config.default_download_folder
        );

        let app = Self {
            home: HomePanel::new(&config),
            settings: SettingsPanel::new(flags.store, &config),
            config,
            invoker: flags.invoker,
            current_view: View::Home,
            appearance: AppearanceMode::default(),
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        String::from("Mediagrab")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::SwitchToHome => {
                self.current_view = View::Home;
                Command::none()
            }

            Message::SwitchToSettings => {
                self.current_view = View::Settings;
                Command::none()
            }

            Message::AppearanceChanged(mode) => {
                self.appearance = mode;
                Command::none()
            }

            Message::Home(HomeMessage::BrowseFolder) => {
                if let Some(path) = rfd::FileDialog::new().pick_folder() {
                    self.home.choose_folder(path.to_string_lossy());
                }
                Command::none()
            }

            Message::Home(HomeMessage::DownloadPressed) => self.start_download(),

            Message::Home(msg) => {
                self.home.update(msg);
                Command::none()
            }

            Message::Settings(SettingsMessage::BrowseFolder) => {
                if let Some(path) = rfd::FileDialog::new().pick_folder() {
                    self.settings.choose_folder(path.to_string_lossy());
                }
                Command::none()
            }

            Message::Settings(msg) => {
                if let Some(config) = self.settings.update(msg) {
                    self.home.adopt_default_folder(&config);
                    self.config = config;
                }
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let sidebar = container(
            column![
                container(text("Mediagrab").size(20)).padding(20),
                self.nav_button("Home", View::Home),
                self.nav_button("Settings", View::Settings),
                Space::with_height(Length::Fill),
                container(pick_list(
                    AppearanceMode::ALL.to_vec(),
                    Some(self.appearance),
                    Message::AppearanceChanged,
                ))
                .padding(20),
            ]
            .spacing(4),
        )
        .width(Length::Fixed(200.0))
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(
            theme::SidebarContainer,
        )));

        let content = match self.current_view {
            View::Home => self.home.view().map(Message::Home),
            View::Settings => self.settings.view().map(Message::Settings),
        };

        row![sidebar, content].into()
    }

    fn theme(&self) -> Self::Theme {
        self.appearance.theme()
    }
}

/// Open the main window
pub fn run(flags: AppFlags) -> iced::Result {
    MediagrabApp::run(Settings {
        window: window::Settings {
            size: Size::new(700.0, 450.0),
            min_size: Some(Size::new(600.0, 400.0)),
            ..Default::default()
        },
        ..Settings::with_flags(flags)
    })
}

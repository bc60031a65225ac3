// SPDX-License-Identifier: MPL-2.0
//! Demo host window for the toast queue.
//!
//! The `App` owns the notification queue for its whole lifetime: the queue is
//! built in `App::new` from the loaded settings and torn down with the window.
//! Actions on the wallet-address form report their outcome as toasts, either
//! directly through the queue or, from async work, through a `Notifier`.

pub mod address;
mod message;
pub mod paths;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::{Notifier, Queue, Severity, TaskScheduler, Toast};
use address::WalletAddress;
use iced::widget::{button, column, row, stack, text, text_input, Container};
use iced::{window, Element, Length, Task};
use std::fmt;
use std::time::Duration;

/// Stand-in latency for the remote summary request.
const LOOKUP_LATENCY: Duration = Duration::from_millis(800);

pub const WINDOW_DEFAULT_WIDTH: f32 = 720.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    address: String,
    summary: Option<String>,
    lookup_in_flight: bool,
    notifications: Queue<TaskScheduler>,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("address", &self.address)
            .field("active_notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .run()
}

/// Applies command-line overrides on top of the loaded settings.
fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(ms) = flags.dismiss_ms {
        config.notifications.dismiss_after_ms = ms;
    }
    if flags.max_active.is_some() {
        config.notifications.max_active = flags.max_active;
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (mut config, config_warning) = config::load();
        apply_flags(&mut config, &flags);

        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        let mut notifications = Queue::from_config(TaskScheduler::new(), &config.notifications);
        notifications.set_diagnostics(diagnostics.handle());

        if let Some(warning) = config_warning {
            diagnostics.handle().log_warning(warning.clone());
            notifications.notify(warning, Severity::Error);
        }
        log::info!(
            "toast queue ready: dismiss after {:?}, capacity {:?}",
            notifications.dismiss_after(),
            notifications.capacity()
        );

        let mut app = App {
            address: String::new(),
            summary: None,
            lookup_in_flight: false,
            notifications,
            diagnostics,
        };
        let task = app.notification_tasks();
        (app, task)
    }

    fn title(&self) -> String {
        "Wallet Chat".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::AddressChanged(value) => {
                self.address = value;
                Task::none()
            }
            Message::Summarize => self.start_lookup(),
            Message::SummaryFinished(summary) => {
                self.lookup_in_flight = false;
                self.summary = Some(summary);
                Task::none()
            }
            Message::SaveChat => {
                self.notifications.notify("Chat saved", Severity::Success);
                Task::none()
            }
            Message::ExportDiagnostics => {
                self.export_diagnostics();
                Task::none()
            }
            Message::ClearNotifications => {
                self.notifications.clear();
                Task::none()
            }
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
        };

        Task::batch([task, self.notification_tasks()])
    }

    fn view(&self) -> Element<'_, Message> {
        let input = text_input("Wallet address (0x… or base58)", &self.address)
            .on_input(Message::AddressChanged)
            .on_submit(Message::Summarize)
            .padding(spacing::XS)
            .size(typography::BODY_LG)
            .width(Length::Fixed(sizing::INPUT_WIDTH));

        let summarize = button(text("Summarize").size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe((!self.lookup_in_flight).then_some(Message::Summarize));
        let save = button(text("Save chat").size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(Message::SaveChat);
        let export = button(text("Export diagnostics").size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(Message::ExportDiagnostics);
        let clear = button(text("Clear toasts").size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press_maybe((!self.notifications.is_empty()).then_some(Message::ClearNotifications));

        let summary = text(self.summary.as_deref().unwrap_or("No address summarized yet."))
            .size(typography::BODY);
        let counter = text(format!("{} active notification(s)", self.notifications.len()))
            .size(typography::CAPTION);

        let content = Container::new(
            column![
                text("Ask about a wallet").size(typography::TITLE_MD),
                input,
                row![summarize, save, export, clear].spacing(spacing::XS),
                summary,
                counter,
            ]
            .spacing(spacing::MD),
        )
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

        let toasts = Toast::view_overlay(&self.notifications).map(Message::Notification);

        stack![content, toasts].into()
    }

    fn start_lookup(&mut self) -> Task<Message> {
        match WalletAddress::parse(&self.address) {
            Err(err) => {
                self.notifications.notify(err.to_string(), Severity::Error);
                Task::none()
            }
            Ok(address) => {
                self.lookup_in_flight = true;
                self.notifications.notify(
                    format!("Fetching summary for {}", address.short()),
                    Severity::Info,
                );
                Task::perform(
                    lookup_summary(address, self.notifications.notifier()),
                    Message::SummaryFinished,
                )
            }
        }
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.process_pending();
        match self.diagnostics.export_json() {
            Ok(json) => {
                log::info!("diagnostics report:\n{json}");
                self.notifications
                    .notify("Diagnostics written to the log", Severity::Info);
            }
            Err(err) => {
                log::error!("failed to export diagnostics: {err}");
                self.notifications
                    .notify("Diagnostics export failed", Severity::Error);
            }
        }
    }

    /// Drains notifier traffic and hands fresh timer tasks to the runtime.
    fn notification_tasks(&mut self) -> Task<Message> {
        self.notifications.process_pending();
        self.diagnostics.process_pending();
        self.notifications.take_tasks().map(Message::Notification)
    }
}

/// Local stand-in for the remote address-summary request.
///
/// Reports its own completion through the notifier, the way a real request
/// handler outside the update loop would.
async fn lookup_summary(address: WalletAddress, notifier: Notifier) -> String {
    tokio::time::sleep(LOOKUP_LATENCY).await;

    let family = match address.kind() {
        address::AddressKind::Evm => "EVM account",
        address::AddressKind::Base58 => "base58 account",
    };
    if let Err(err) = notifier.success(format!("Summary ready for {}", address.short())) {
        log::error!("summary finished after the window closed: {err}");
    }
    format!("{} ({family})", address.as_str())
}

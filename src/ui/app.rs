use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::chat::exchange::PendingChat;
use crate::chat::SessionStore;
use crate::config::Config;
use crate::docs::{DocumentCatalog, SessionDocuments};
use crate::ui::components::{ChatView, ChatViewState, ConfirmAction, ConfirmDialog, InputBox, SidebarPanel};
use crate::ui::events::AppEvent;
use crate::ui::sidebar::SidebarState;

mod app_chat;
mod app_documents;
mod app_input;
mod app_sessions;

/// Main application state
pub struct App {
    /// Backend API client (cloned into network tasks)
    api: ApiClient,
    /// Session state: active id, transcript, catalog
    store: SessionStore,
    /// Global knowledge-base catalog
    knowledge: DocumentCatalog,
    /// Attachments of the active session
    session_docs: SessionDocuments,
    /// Sidebar open/width/drag state
    sidebar: SidebarState,
    /// Transcript scroll state
    chat_scroll: ChatViewState,
    /// Prompt input editor
    input: InputBox,
    /// Chat requests currently in flight, keyed by origin stamp
    pending_chats: Vec<PendingChat>,
    /// Destructive action awaiting confirmation
    pending_confirm: Option<ConfirmAction>,
    /// Blocking notice after a failed destructive action
    notice: Option<String>,
    /// Whether the app should quit
    should_quit: bool,
    /// Tick counter for the thinking indicator
    tick_count: u32,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let api = ApiClient::new(config.api_url);

        Self {
            api,
            store: SessionStore::new(),
            knowledge: DocumentCatalog::default(),
            session_docs: SessionDocuments::default(),
            sidebar: SidebarState::new(),
            chat_scroll: ChatViewState::default(),
            input: InputBox::new(),
            pending_chats: Vec::new(),
            pending_confirm: None,
            notice: None,
            should_quit: false,
            tick_count: 0,
            event_tx,
            event_rx,
        }
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        terminal.clear()?;

        // Initial data loads
        self.refresh_sessions();
        self.refresh_knowledge();
        self.refresh_session_docs();

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input + tick
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        match event::read()? {
                            Event::Key(key) => self.handle_key_event(key),
                            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                            _ => {}
                        }
                    }
                    self.tick_count = self.tick_count.wrapping_add(1);
                }

                // Completions from network tasks
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ChatCompleted { origin_id, result } => {
                self.handle_chat_completed(origin_id, result);
            }
            AppEvent::SessionsListed { result } => self.handle_sessions_listed(result),
            AppEvent::SessionLoaded { result } => self.handle_session_loaded(result),
            AppEvent::SessionDeleted { session_id, result } => {
                self.handle_session_deleted(session_id, result);
            }
            AppEvent::KnowledgeListed { result } => self.handle_knowledge_listed(result),
            AppEvent::SessionDocsListed {
                for_session,
                result,
            } => self.handle_session_docs_listed(for_session, result),
            AppEvent::UploadCompleted { scope, result } => {
                self.handle_upload_completed(scope, result);
            }
            AppEvent::DocumentDeleted { scope, result } => {
                self.handle_document_deleted(scope, result);
            }
            AppEvent::CollectionCleared { scope, result } => {
                self.handle_collection_cleared(scope, result);
            }
            AppEvent::ScrollToBottom => self.chat_scroll.scroll_to_bottom(),
        }
    }

    /// Schedule a deferred scroll-to-bottom. Fire-and-forget: nothing awaits
    /// it and it carries no state.
    fn schedule_scroll(&self) {
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            let _ = tx.send(AppEvent::ScrollToBottom);
        });
    }

    fn draw(&mut self, f: &mut Frame) {
        let size = f.area();

        let sidebar_width = self.sidebar.cell_width().min(size.width / 2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(size);

        if self.sidebar.is_open {
            let panel = SidebarPanel::new(&self.sidebar, self.store.active_id())
                .sessions(self.store.sessions())
                .knowledge(self.knowledge.documents(), self.knowledge.is_loading())
                .api_url(self.api.base_url());
            f.render_widget(panel, columns[0]);
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(columns[1]);

        let header = Line::from(vec![
            Span::styled("e-talk", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                "  Always here to help",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(header), rows[0]);

        let chat = ChatView::new(self.store.messages())
            .session_docs(self.session_docs.documents())
            .waiting(self.store.is_waiting())
            .tick(self.tick_count / 6);
        f.render_stateful_widget(chat, rows[1], &mut self.chat_scroll);

        self.input
            .render(rows[2], f.buffer_mut(), self.store.can_send());

        let status = match &self.notice {
            Some(notice) => Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Red),
            )),
            None => Line::from(Span::styled(
                "AI can make mistakes. Verify important information.",
                Style::default().fg(Color::DarkGray),
            )),
        };
        f.render_widget(Paragraph::new(status), rows[3]);

        if let Some(action) = &self.pending_confirm {
            f.render_widget(ConfirmDialog::new(action), size);
        }
    }
}

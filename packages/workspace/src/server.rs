use crate::characters::CharacterRoster;
use crate::collaboration::{Action, Collaborators, CommentBoard};
use crate::config::EditorConfig;
use crate::debounce::Debouncer;
use crate::error::{WorkspaceError, WorkspaceResult};
use crate::events::{CommandEnvelope, EditorCommand, EditorEvent, Notice, PersistPayload};
use crate::project::ProjectStore;
use chrono::Utc;
use screenplay_analytics::normalize_character_name;
use screenplay_document::{search, Document, FormatKey};
use screenplay_editor::{EditSession, EditorError, HistoryError, Pipeline};
use std::ops::ControlFlow;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, warn};

const COMMAND_CAPACITY: usize = 64;
const EVENT_CAPACITY: usize = 256;

/// Cloneable front door to a running session
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<CommandEnvelope>,
    events: broadcast::Sender<EditorEvent>,
}

impl SessionHandle {
    /// Send a command as the local owner
    pub async fn send(&self, command: EditorCommand) -> WorkspaceResult<()> {
        self.dispatch(command.into()).await
    }

    /// Send a command on behalf of a collaborator
    pub async fn send_as(&self, user: impl Into<String>, command: EditorCommand) -> WorkspaceResult<()> {
        self.dispatch(CommandEnvelope {
            user: Some(user.into()),
            command,
        })
        .await
    }

    pub async fn dispatch(&self, envelope: CommandEnvelope) -> WorkspaceResult<()> {
        self.commands
            .send(envelope)
            .await
            .map_err(|_| WorkspaceError::SessionClosed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.events.subscribe()
    }

    /// Events as a stream. Lagging subscribers skip what they missed.
    pub fn event_stream(&self) -> impl Stream<Item = EditorEvent> {
        BroadcastStream::new(self.events.subscribe()).filter_map(|item| match item {
            Ok(event) => Some(event),
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                warn!(skipped, "Event subscriber lagged");
                None
            }
        })
    }
}

/// Owns one edit session and serializes every operation on it.
///
/// Edits restart both debouncers: the history window decides when a
/// snapshot is committed, the analytics window when derived views are
/// recomputed and published. Autosave runs on its own fixed period.
pub struct WorkspaceServer {
    config: EditorConfig,
    session: EditSession,
    pipeline: Pipeline,
    collaborators: Collaborators,
    comments: CommentBoard,
    roster: CharacterRoster,
    store: Option<(Arc<dyn ProjectStore>, String)>,
    commands: mpsc::Receiver<CommandEnvelope>,
    events: broadcast::Sender<EditorEvent>,
    analytics: Debouncer,
    history: Debouncer,
}

impl WorkspaceServer {
    pub fn new(id: impl Into<String>, document: Document, config: EditorConfig) -> (Self, SessionHandle) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);

        let server = Self {
            session: EditSession::new(id, document, config.undo_stack_limit),
            pipeline: Pipeline::new(),
            collaborators: Collaborators::new(),
            comments: CommentBoard::new(),
            roster: CharacterRoster::new(),
            store: None,
            commands: command_rx,
            events: event_tx.clone(),
            analytics: Debouncer::new(config.analytics_window()),
            history: Debouncer::new(config.history_window()),
            config,
        };

        let handle = SessionHandle {
            commands: command_tx,
            events: event_tx,
        };

        (server, handle)
    }

    /// Write persisted content through `store` under `project_id`
    pub fn with_store(mut self, store: Arc<dyn ProjectStore>, project_id: impl Into<String>) -> Self {
        self.store = Some((store, project_id.into()));
        self
    }

    pub fn with_collaborators(mut self, collaborators: Collaborators) -> Self {
        self.collaborators = collaborators;
        self
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Process commands until `Shutdown` or every handle is dropped
    pub async fn run(mut self) {
        info!(
            session = %self.session.id,
            blocks = self.session.document().len(),
            "Session started"
        );

        let period = self.config.auto_save_period();
        let mut autosave = time::interval_at(Instant::now() + period, period);
        autosave.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // First derived views after the usual quiet period
        self.analytics.trigger();

        loop {
            tokio::select! {
                envelope = self.commands.recv() => {
                    let Some(envelope) = envelope else {
                        debug!("All session handles dropped");
                        break;
                    };
                    if self.handle(envelope).is_break() {
                        break;
                    }
                }
                () = self.history.fired() => self.commit_history(),
                () = self.analytics.fired() => self.publish_derived(),
                _ = autosave.tick() => {
                    self.persist();
                }
            }
        }

        // Keep the trailing burst of typing
        if self.history.is_pending() {
            self.history.cancel();
            self.commit_history();
        }

        info!(session = %self.session.id, version = self.session.version(), "Session stopped");
    }

    fn handle(&mut self, envelope: CommandEnvelope) -> ControlFlow<()> {
        let CommandEnvelope { user, command } = envelope;
        let user = user.as_deref();

        if command.is_edit() {
            if let Err(err) = self.collaborators.check(user, Action::Edit) {
                warn!(?user, "Rejected edit without permission");
                self.notify(Notice::error(err.to_string()));
                return ControlFlow::Continue(());
            }
        }

        match command {
            EditorCommand::ApplyFormat { format } => {
                let result = self.session.apply_format(&format).map(drop);
                self.after_edit(result);
            }
            EditorCommand::Edit(mutation) => {
                let result = self.session.apply(mutation).map(drop);
                self.after_edit(result);
            }
            EditorCommand::Undo => {
                self.history.cancel();
                let result = self.session.undo().map(drop);
                self.after_restore(result);
            }
            EditorCommand::Redo => {
                self.history.cancel();
                let result = self.session.redo().map(drop);
                self.after_restore(result);
            }
            EditorCommand::LoadContent(content) => {
                let result = self.session.load_content(content.as_deref());
                if result.is_ok() {
                    self.history.cancel();
                }
                self.after_restore(result);
            }
            EditorCommand::AnalyzeRequest => {
                // A pending cycle also owes a validation refresh
                if self.analytics.is_pending() {
                    self.analytics.cancel();
                    self.publish_derived();
                } else {
                    self.publish_analytics();
                }
            }
            EditorCommand::ValidateRequest => self.publish_validation(),
            EditorCommand::SearchRequest { query, format_filter } => {
                self.search(query, format_filter.as_deref())
            }
            EditorCommand::SetActiveBlock { index } => {
                if let Err(err) = self.session.set_active_block(index) {
                    self.notify(notice_for(&err));
                }
            }
            EditorCommand::AddComment { line_number, text } => {
                let added = self
                    .comments
                    .add(&self.collaborators, user, line_number, &text)
                    .map(|comment| comment.id.clone());
                match added {
                    Ok(id) => {
                        debug!(%id, line_number, "Comment added");
                        self.publish_comments();
                    }
                    Err(err) => self.notify(Notice::error(err.to_string())),
                }
            }
            EditorCommand::ResolveComment { id } => match self.comments.toggle_resolved(&id) {
                Ok(_) => self.publish_comments(),
                Err(err) => self.notify(Notice::warning(err.to_string())),
            },
            EditorCommand::DeleteComment { id } => {
                match self.comments.delete(&self.collaborators, user, &id) {
                    Ok(_) => self.publish_comments(),
                    Err(err) => self.notify(Notice::error(err.to_string())),
                }
            }
            EditorCommand::DescribeCharacter {
                name,
                role,
                description,
            } => {
                let name = normalize_character_name(&name);
                if self.roster.describe(&name, &role, &description) {
                    self.publish(EditorEvent::CharactersUpdated(self.roster.profiles()));
                } else {
                    self.notify(Notice::warning(format!("Unknown character: {}", name)));
                }
            }
            EditorCommand::Persist => {
                if self.persist() {
                    self.notify(Notice::success("Project saved"));
                }
            }
            EditorCommand::Shutdown => return ControlFlow::Break(()),
        }

        ControlFlow::Continue(())
    }

    /// Typing and retagging: snapshot and recompute once the burst settles
    fn after_edit(&mut self, result: Result<(), EditorError>) {
        match result {
            Ok(()) => {
                self.history.trigger();
                self.analytics.trigger();
                self.publish_content();
            }
            Err(err) => self.notify(notice_for(&err)),
        }
    }

    /// Undo, redo and load replace the document wholesale; history is
    /// already settled
    fn after_restore(&mut self, result: Result<(), EditorError>) {
        match result {
            Ok(()) => {
                self.analytics.trigger();
                self.publish_content();
            }
            Err(err) => self.notify(notice_for(&err)),
        }
    }

    fn commit_history(&mut self) {
        match self.session.commit() {
            Ok(true) => debug!(
                undo_levels = self.session.history().undo_levels(),
                "History snapshot committed"
            ),
            Ok(false) => {}
            Err(err) => self.notify(notice_for(&err)),
        }
    }

    fn publish_derived(&mut self) {
        self.publish_analytics();
        self.publish_validation();
    }

    fn publish_analytics(&mut self) {
        let snapshot = self.pipeline.analyze(self.session.document());

        if self.roster.discover(&snapshot) {
            self.publish(EditorEvent::CharactersUpdated(self.roster.profiles()));
        }
        self.publish(EditorEvent::AnalyticsUpdated(snapshot));
    }

    fn publish_validation(&mut self) {
        let report = self.pipeline.validate(self.session.document());
        self.publish(EditorEvent::ValidationResults(report));
    }

    /// A blank filter means every format
    fn search(&mut self, query: String, format_filter: Option<&str>) {
        let format_filter = format_filter.filter(|f| !f.trim().is_empty());
        let filter = match format_filter.map(FormatKey::lookup).transpose() {
            Ok(filter) => filter,
            Err(err) => {
                self.notify(Notice::warning(err.to_string()));
                self.publish(EditorEvent::SearchResults {
                    query,
                    hits: Vec::new(),
                });
                return;
            }
        };

        let hits = search(self.session.document(), &query, filter);
        debug!(%query, hits = hits.len(), "Search complete");
        self.publish(EditorEvent::SearchResults { query, hits });
    }

    /// Returns whether the content reached an attached store
    fn persist(&mut self) -> bool {
        let payload = PersistPayload {
            content: self.session.document().serialize(),
            updated_at: Utc::now(),
        };

        let mut saved = false;
        if let Some((store, project_id)) = &self.store {
            match store.save_content(project_id, &payload) {
                Ok(project) => {
                    debug!(id = %project.id, "Project saved");
                    saved = true;
                }
                Err(err) => {
                    warn!(%project_id, error = %err, "Saving project failed");
                    self.notify(Notice::error(format!("Saving failed: {}", err)));
                }
            }
        }

        self.publish(EditorEvent::PersistRequested(payload));
        saved
    }

    fn publish_content(&mut self) {
        self.publish(EditorEvent::ContentChanged {
            version: self.session.version(),
            active_block: self.session.active_block(),
            content: self.session.document().serialize(),
        });
    }

    fn publish_comments(&mut self) {
        self.publish(EditorEvent::CommentsUpdated(self.comments.comments().to_vec()));
    }

    fn notify(&self, notice: Notice) {
        self.publish(EditorEvent::Notice(notice));
    }

    fn publish(&self, event: EditorEvent) {
        // No subscribers is not an error
        let _ = self.events.send(event);
    }
}

fn notice_for(err: &EditorError) -> Notice {
    match err {
        EditorError::History(HistoryError::NothingToUndo | HistoryError::NothingToRedo) => {
            Notice::info(err.to_string())
        }
        _ => Notice::error(err.to_string()),
    }
}

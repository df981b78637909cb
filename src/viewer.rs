//! The viewer: from one chat message to an optional PNG attachment.
//!
//! [`Viewer::respond`] is a pure function of the message and the
//! configuration. Delivery and event subscription live outside it (see
//! [`crate::watcher`]).

use tracing::{debug, warn};

use crate::config::ViewerConfig;
use crate::error::{Result, ViewerError};
use crate::parser::{Extractor, ShapeBuilder, ShortKeyBuilder};
use crate::render::{encode_png, GridCompositor, RenderedShape, ShapeRenderer, TileRenderer};

/// An inbound chat message, reduced to what the viewer looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub content: String,

    /// Whether the author is a bot. Bot messages are never answered.
    pub author_is_bot: bool,

    /// Role identifiers held by the author.
    pub roles: Vec<String>,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }
}

/// A named binary file to post back to the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub data: Vec<u8>,
}

/// Renders shape instructions found in messages.
pub struct Viewer<B = ShortKeyBuilder, R = ShapeRenderer> {
    config: ViewerConfig,
    builder: B,
    renderer: R,
}

impl Viewer {
    /// A viewer using the built-in short-key builder and renderer.
    pub fn builtin(config: ViewerConfig) -> Self {
        Self::new(config, ShortKeyBuilder, ShapeRenderer::new())
    }
}

impl<B, R> Viewer<B, R>
where
    B: ShapeBuilder,
    R: TileRenderer<B::Descriptor>,
{
    pub fn new(config: ViewerConfig, builder: B, renderer: R) -> Self {
        Self {
            config,
            builder,
            renderer,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Extract descriptors, capped at `max_shapes`.
    pub fn shapes(&self, content: &str) -> Result<Vec<B::Descriptor>> {
        let mut shapes = Extractor::new(self.config.max_modifiers).extract(content, &self.builder)?;
        if shapes.len() > self.config.max_shapes {
            debug!(found = shapes.len(), kept = self.config.max_shapes, "truncating shapes");
            shapes.truncate(self.config.max_shapes);
        }
        Ok(shapes)
    }

    /// Render descriptors into the composite grid. `None` when there are none.
    pub fn render_shapes(&self, shapes: &[B::Descriptor]) -> Result<Option<RenderedShape>> {
        if shapes.is_empty() {
            return Ok(None);
        }

        let tiles = shapes
            .iter()
            .map(|shape| self.renderer.render(shape, self.config.tile_size))
            .collect::<Result<Vec<_>>>()?;

        let compositor =
            GridCompositor::new(self.config.tile_size).with_max_columns(self.config.max_columns);
        compositor.composite(&tiles).map(Some).ok_or_else(|| ViewerError::Render {
            message: format!(
                "Grid of {} tiles at {} px is too large",
                tiles.len(),
                self.config.tile_size
            ),
            help: Some("Lower tile_size or max_columns in viewer.yaml".to_string()),
        })
    }

    /// Render every instruction in `content`, ignoring access control.
    pub fn render_message(&self, content: &str) -> Result<Option<Attachment>> {
        let shapes = self.shapes(content)?;
        let Some(image) = self.render_shapes(&shapes)? else {
            return Ok(None);
        };

        Ok(Some(Attachment {
            name: self.config.attachment_name.clone(),
            data: encode_png(&image)?,
        }))
    }

    /// Handle a message explicitly addressed to the viewer.
    ///
    /// Errors surface to the caller. Calling the viewer command by name is
    /// an error; callers without an access role get `Ok(None)`.
    pub fn respond(&self, message: &Message) -> Result<Option<Attachment>> {
        if message
            .content
            .to_lowercase()
            .starts_with(&self.config.command.to_lowercase())
        {
            return Err(ViewerError::DirectInvocation {
                command: self.config.command.clone(),
            });
        }

        if !self.config.allows(message.roles.as_slice()) {
            debug!("caller lacks a viewer role");
            return Ok(None);
        }

        self.render_message(&message.content)
    }

    /// Handle a message seen while passively watching a channel.
    ///
    /// Bot messages and messages without `{` are skipped. Errors are
    /// logged and swallowed.
    pub fn watch(&self, message: &Message) -> Option<Attachment> {
        if message.author_is_bot || !message.content.contains('{') {
            return None;
        }

        match self.respond(message) {
            Ok(attachment) => attachment,
            Err(e) => {
                warn!(error = %e, "ignoring viewer error");
                None
            }
        }
    }
}

//! Registry entry wrapping a chunker.

use elemchunk_core::{ChunkError, ChunkOptions, Chunker, MAX_CHARACTERS};
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::trace;

/// A registry entry for a chunker.
///
/// Holds the chunker implementing a strategy together with the option names
/// it accepts. The names are read from the chunker's [`Signature`] on first
/// use and cached for the life of the entry.
///
/// [`Signature`]: elemchunk_core::Signature
pub struct ChunkerSpec {
    chunker: Arc<dyn Chunker>,
    kw_arg_names: OnceLock<Vec<String>>,
}

impl ChunkerSpec {
    /// Wrap a chunker. Its signature is not inspected until first use.
    pub fn new<C: Chunker + 'static>(chunker: C) -> Self {
        Self::from_arc(Arc::new(chunker))
    }

    /// Wrap a chunker that is already shared.
    pub fn from_arc(chunker: Arc<dyn Chunker>) -> Self {
        Self {
            chunker,
            kw_arg_names: OnceLock::new(),
        }
    }

    /// The wrapped chunker.
    pub fn chunker(&self) -> &Arc<dyn Chunker> {
        &self.chunker
    }

    /// Option names accepted by the chunker, `elements` excluded.
    ///
    /// Fails with [`ChunkError::Signature`] when the chunker declares no
    /// signature or its signature lacks `max_characters`. Failures are not
    /// cached; concurrent first calls may each compute the names, but only
    /// one result is stored.
    pub fn kw_arg_names(&self) -> Result<&[String], ChunkError> {
        if let Some(names) = self.kw_arg_names.get() {
            return Ok(names.as_slice());
        }

        let names = self.introspect()?;
        Ok(self.kw_arg_names.get_or_init(|| names).as_slice())
    }

    /// Keep only the options this chunker accepts.
    pub fn filter_options(&self, options: &ChunkOptions) -> Result<ChunkOptions, ChunkError> {
        Ok(options.retain_names(self.kw_arg_names()?))
    }

    fn introspect(&self) -> Result<Vec<String>, ChunkError> {
        let name = self.chunker.name();
        let signature = self.chunker.signature().ok_or_else(|| ChunkError::Signature {
            chunker: name.to_string(),
            reason: "no signature declared".to_string(),
        })?;

        if !signature.accepts_max_characters() {
            return Err(ChunkError::Signature {
                chunker: name.to_string(),
                reason: format!("`{MAX_CHARACTERS}` is not accepted"),
            });
        }

        let names: Vec<String> = signature.option_names().map(str::to_string).collect();
        trace!("Chunker '{}' accepts options {:?}", name, names);
        Ok(names)
    }
}

impl fmt::Debug for ChunkerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChunkerSpec")
            .field("chunker", &self.chunker.name())
            .field("kw_arg_names", &self.kw_arg_names.get())
            .finish()
    }
}

//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::TextService;
use crate::application::VowelSet;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraResult;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Filesystem abstraction
    pub fs: Arc<dyn FileSystem>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            settings: Arc::new(settings),
            fs,
        }
    }

    /// Text pipeline configured from the settings.
    pub fn text_service(&self) -> InfraResult<TextService> {
        Ok(TextService::new(Arc::clone(&self.fs), &self.settings)?)
    }

    pub fn vowel_set(&self) -> VowelSet {
        self.settings.vowel_set()
    }
}

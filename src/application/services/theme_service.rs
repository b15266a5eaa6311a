//! Process-wide colour theme.

use tokio::sync::RwLock;

use crate::domain::entities::Theme;

/// Holds the theme shared by every page render.
///
/// Initialised once from configuration; lives for the whole process.
pub struct ThemeService {
    current: RwLock<Theme>,
}

impl ThemeService {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.current.read().await
    }

    /// Flips between light and dark and returns the new theme.
    pub async fn toggle(&self) -> Theme {
        let mut current = self.current.write().await;
        *current = current.toggled();
        tracing::debug!(theme = %*current, "Theme toggled");
        *current
    }
}

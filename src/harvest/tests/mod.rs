
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::NavigationError;
use crate::harvest::session::{Renderer, RenderSession};

/// The pages a scripted seed serves, in walk order
#[derive(Clone, Default)]
struct SeedScript {
    pages: Vec<String>,
    /// Refuse to open a session at all
    fail_open: bool,
    /// Fail the advance that would reveal page `index` (0-based)
    fail_advance_to: Option<usize>,
}

/// Renderer that serves canned page HTML per seed URL
struct ScriptedRenderer {
    scripts: HashMap<String, SeedScript>,
    opens: Arc<AtomicUsize>,
    advances: Arc<AtomicUsize>,
}

impl ScriptedRenderer {
    fn new(scripts: Vec<(&str, SeedScript)>) -> Self {
        Self {
            scripts: scripts
                .into_iter()
                .map(|(seed, script)| (seed.to_string(), script))
                .collect(),
            opens: Arc::new(AtomicUsize::new(0)),
            advances: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    fn advances(&self) -> usize {
        self.advances.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Renderer for ScriptedRenderer {
    type Session = ScriptedSession;

    async fn open(&self, url: &str) -> Result<ScriptedSession, NavigationError> {
        self.opens.fetch_add(1, Ordering::SeqCst);

        let script = self.scripts.get(url).cloned().unwrap_or_default();
        if script.fail_open || script.pages.is_empty() {
            return Err(NavigationError::Navigate {
                url: url.to_string(),
                message: "scripted load failure".to_string(),
            });
        }

        Ok(ScriptedSession {
            script,
            index: 0,
            advances: Arc::clone(&self.advances),
        })
    }
}

struct ScriptedSession {
    script: SeedScript,
    index: usize,
    advances: Arc<AtomicUsize>,
}

#[async_trait]
impl RenderSession for ScriptedSession {
    async fn page_html(&mut self) -> Result<String, NavigationError> {
        Ok(self.script.pages[self.index].clone())
    }

    async fn advance(&mut self) -> Result<(), NavigationError> {
        self.advances.fetch_add(1, Ordering::SeqCst);

        let next = self.index + 1;
        if self.script.fail_advance_to == Some(next) {
            return Err(NavigationError::Command {
                message: "scripted advance failure".to_string(),
            });
        }

        self.index = next;
        Ok(())
    }

    async fn close(self) -> Result<(), NavigationError> {
        Ok(())
    }
}

/// One listing page in the default table markup
fn listing_page(rows: &[(&str, &str)], next_enabled: bool) -> String {
    let mut body = String::new();
    for (name, href) in rows {
        body.push_str(&format!(
            r#"<tr><td><a href="{href}">{name}</a></td><td>2024</td></tr>"#
        ));
    }

    let disabled = if next_enabled { "" } else { " disabled" };
    format!(
        r#"<html><body>
            <table id="handbookDataTable"><tbody>{body}</tbody></table>
            <a id="handbookDataTable_next" class="paginate_button next{disabled}">Next</a>
        </body></html>"#
    )
}

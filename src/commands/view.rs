use anyhow::Result;

use crate::opener::Opener;
use crate::session::Session;
use crate::tui::app;

pub fn run(session: Session) -> Result<()> {
    let opener = Opener::from_config(session.config.opener.clone());
    let title = session.title();
    app::run(session.into_browser(), opener, &title)
}

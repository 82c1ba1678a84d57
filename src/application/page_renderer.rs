// Page renderer trait - The host UI layer that turns instructions into pages
use crate::domain::navigation::RenderInstruction;
use crate::domain::page::PageKey;

pub trait PageRenderer: Send + Sync {
    /// Full page with the menu, `active` highlighted, around the instruction's content.
    fn render_page(&self, active: &PageKey, instruction: &RenderInstruction) -> String;

    /// Full page shown when `requested` is not a known page.
    fn render_not_found(&self, requested: &str) -> String;
}

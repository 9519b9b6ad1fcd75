//! Window control
//!
//! The hook runner minimizes or closes the launcher window around a game's
//! lifetime, but it runs on a background thread and must not know about
//! the GUI. This trait is the seam: the app hands the runner an egui-backed
//! implementation, tests hand it a no-op.

use eframe::egui;

pub trait WindowControl: Send + Sync {
    fn minimize(&self);
    fn close(&self);
}

/// Window control over a live egui viewport.
pub struct EguiWindow {
    ctx: egui::Context,
}

impl EguiWindow {
    pub fn new(ctx: egui::Context) -> Self {
        EguiWindow { ctx }
    }
}

impl WindowControl for EguiWindow {
    fn minimize(&self) {
        self.ctx
            .send_viewport_cmd(egui::ViewportCommand::Minimized(true));
        // viewport commands are only processed on the next frame
        self.ctx.request_repaint();
    }

    fn close(&self) {
        self.ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        self.ctx.request_repaint();
    }
}

/// No-op control for tests and headless runs.
pub struct NoWindow;

impl WindowControl for NoWindow {
    fn minimize(&self) {}
    fn close(&self) {}
}

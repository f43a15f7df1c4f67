//! In-memory stand-ins for the platform capabilities.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::{
    Displays, Error, Monitor, MonitorId, Notifier, Rect, Result, WindowControl, WindowQuery,
};

pub(crate) struct MockWindow {
    pub rect: Cell<Rect>,
    pub title: String,
    pub opacity: Cell<Option<u8>>,
    pub topmost: Cell<bool>,
    pub monitor: Cell<MonitorId>,
    pub set_rect_calls: Cell<usize>,
    /// Makes every write fail, like a handle that went stale.
    pub fail_writes: bool,
}

impl MockWindow {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect: Cell::new(rect),
            title: "Untitled - Notepad".into(),
            opacity: Cell::new(None),
            topmost: Cell::new(false),
            monitor: Cell::new(MonitorId(1)),
            set_rect_calls: Cell::new(0),
            fail_writes: false,
        }
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Platform("invalid window handle".into()));
        }
        Ok(())
    }
}

impl WindowQuery for MockWindow {
    fn rect(&self) -> Result<Rect> {
        Ok(self.rect.get())
    }

    fn title(&self) -> Result<String> {
        Ok(self.title.clone())
    }

    fn opacity(&self) -> Result<Option<u8>> {
        Ok(self.opacity.get())
    }

    fn is_topmost(&self) -> Result<bool> {
        Ok(self.topmost.get())
    }

    fn monitor(&self) -> Result<MonitorId> {
        Ok(self.monitor.get())
    }
}

impl WindowControl for MockWindow {
    fn set_rect(&self, rect: &Rect) -> Result<()> {
        self.check_writable()?;
        self.rect.set(*rect);
        self.set_rect_calls.set(self.set_rect_calls.get() + 1);
        Ok(())
    }

    fn set_position(&self, x: i32, y: i32) -> Result<()> {
        self.check_writable()?;
        let r = self.rect.get();
        self.rect
            .set(Rect::from_origin_size(x, y, r.width(), r.height()));
        Ok(())
    }

    fn enable_layered(&self) -> Result<()> {
        self.check_writable()?;
        if self.opacity.get().is_none() {
            // Layered but no alpha set yet reads back as opaque.
            self.opacity.set(Some(255));
        }
        Ok(())
    }

    fn set_opacity(&self, alpha: u8) -> Result<()> {
        self.check_writable()?;
        if self.opacity.get().is_none() {
            return Err(Error::Platform("window is not layered".into()));
        }
        self.opacity.set(Some(alpha));
        Ok(())
    }

    fn set_topmost(&self, on: bool) -> Result<()> {
        self.check_writable()?;
        self.topmost.set(on);
        Ok(())
    }
}

pub(crate) struct MockDisplays(pub Vec<Monitor>);

impl MockDisplays {
    /// Two 1920x1080 monitors side by side, ids 1 and 2.
    pub fn dual() -> Self {
        Self(vec![
            Monitor {
                id: MonitorId(1),
                rect: Rect::new(0, 0, 1920, 1080),
            },
            Monitor {
                id: MonitorId(2),
                rect: Rect::new(1920, 0, 3840, 1080),
            },
        ])
    }
}

impl Displays for MockDisplays {
    fn monitors(&self) -> Result<Vec<Monitor>> {
        Ok(self.0.clone())
    }
}

#[derive(Default)]
pub(crate) struct MockNotifier {
    pub shown: RefCell<Vec<(Rect, String, Duration)>>,
}

impl Notifier for MockNotifier {
    fn notify(&self, anchor: &Rect, text: &str, duration: Duration) -> Result<()> {
        self.shown
            .borrow_mut()
            .push((*anchor, text.to_string(), duration));
        Ok(())
    }
}

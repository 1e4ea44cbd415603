use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};

use crate::host::{MaskSurface, NodeSurface, PageSurface, ViewportProbe};
use crate::overlay::OverlayId;
use crate::types::{Point, Size};

const MASK_CHAR: char = '░';

/// Last known placement of one overlay.
#[derive(Debug, Clone, Default)]
struct NodeFrame {
    at: Point,
    size: Size,
    z_index: i32,
    label: String,
}

/// A [`Host`](crate::Host) that draws overlays as boxes in the terminal.
///
/// The viewport is the terminal size in cells. A terminal has no page to
/// scroll, so the scroll offset is always 0 and pinning does nothing.
pub struct TerminalHost {
    stdout: io::Stdout,
    size: Size,
    nodes: BTreeMap<OverlayId, NodeFrame>,
    mask_visible: bool,
}

impl TerminalHost {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            size: Size::new(width as u32, height as u32),
            nodes: BTreeMap::new(),
            mask_visible: false,
        })
    }

    /// Re-read the terminal size. Returns true if it changed.
    pub fn refresh_size(&mut self) -> io::Result<bool> {
        let (width, height) = terminal::size()?;
        let size = Size::new(width as u32, height as u32);
        let changed = size != self.size;
        self.size = size;
        Ok(changed)
    }

    /// Text drawn on the first inner row of an overlay's box.
    pub fn set_label(&mut self, node: OverlayId, label: impl Into<String>) {
        self.nodes.entry(node).or_default().label = label.into();
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Repaint the mask and every overlay, lowest z-index first.
    pub fn draw(&mut self) -> io::Result<()> {
        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;

        if self.mask_visible {
            let row: String = std::iter::repeat(MASK_CHAR)
                .take(self.size.width as usize)
                .collect();
            queue!(self.stdout, SetAttribute(Attribute::Dim))?;
            for y in 0..self.size.height.min(u16::MAX as u32) as u16 {
                queue!(self.stdout, cursor::MoveTo(0, y), Print(&row))?;
            }
            queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        }

        let mut frames: Vec<(&OverlayId, &NodeFrame)> = self.nodes.iter().collect();
        frames.sort_by_key(|(id, frame)| (frame.z_index, **id));
        for (_, frame) in frames {
            draw_frame(&mut self.stdout, frame, self.size)?;
        }

        self.stdout.flush()
    }
}

/// Draw one overlay box, clipped to the screen.
fn draw_frame(out: &mut io::Stdout, frame: &NodeFrame, screen: Size) -> io::Result<()> {
    let width = frame.size.width as i32;
    let height = frame.size.height as i32;
    if width < 2 || height < 2 {
        return Ok(());
    }

    let x0 = frame.at.x.max(0);
    let x1 = (frame.at.x + width).min(screen.width as i32);
    if x0 >= x1 {
        return Ok(());
    }

    let label: Vec<char> = frame.label.chars().collect();

    for row in 0..height {
        let y = frame.at.y + row;
        if y < 0 || y >= screen.height as i32 {
            continue;
        }

        let line: String = (x0..x1)
            .map(|x| {
                let col = x - frame.at.x;
                let last_col = col == width - 1;
                match row {
                    0 if col == 0 => '┌',
                    0 if last_col => '┐',
                    0 => '─',
                    r if r == height - 1 && col == 0 => '└',
                    r if r == height - 1 && last_col => '┘',
                    r if r == height - 1 => '─',
                    _ if col == 0 || last_col => '│',
                    1 if col >= 2 => label.get((col - 2) as usize).copied().unwrap_or(' '),
                    _ => ' ',
                }
            })
            .collect();

        queue!(out, cursor::MoveTo(x0 as u16, y as u16), Print(line))?;
    }

    Ok(())
}

impl ViewportProbe for TerminalHost {
    fn viewport(&self) -> Size {
        self.size
    }

    fn scroll_y(&self) -> i32 {
        0
    }
}

impl PageSurface for TerminalHost {
    fn scroll_to(&mut self, _y: i32) {}

    fn pin_page(&mut self, _offset: i32, _height: u32) {}

    fn unpin_page(&mut self) {}
}

impl NodeSurface for TerminalHost {
    fn place(&mut self, node: OverlayId, at: Point) {
        self.nodes.entry(node).or_default().at = at;
    }

    fn resize_node(&mut self, node: OverlayId, size: Size) {
        self.nodes.entry(node).or_default().size = size;
    }

    fn set_z_index(&mut self, node: OverlayId, z_index: i32) {
        self.nodes.entry(node).or_default().z_index = z_index;
    }

    fn remove_node(&mut self, node: OverlayId) {
        self.nodes.remove(&node);
    }
}

impl MaskSurface for TerminalHost {
    // The mask is painted by `draw`, so there is no element to create
    fn create_mask(&mut self) {}

    fn set_mask_display(&mut self, visible: bool) {
        self.mask_visible = visible;
    }
}

impl Drop for TerminalHost {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

//! Text measurement backed by GDI fonts, for hosts that draw with GDI.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::warn;
use widestring::U16CString as WCString;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{GetLastError, SIZE};
use windows::Win32::Graphics::Gdi::*;

use super::*;

pub struct Font {
    pub(crate) hfont: HFONT,
}

impl Drop for Font {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.hfont.into());
        }
    }
}

impl Font {
    pub fn new(style: &TextStyle) -> Result<Rc<Font>> {
        unsafe {
            let face_name: WCString = WCString::from_str_truncate(&style.family);
            let weight = if style.bold { FW_BOLD } else { FW_NORMAL };
            let quality = if style.antialias {
                ANTIALIASED_QUALITY
            } else {
                NONANTIALIASED_QUALITY
            };
            let hfont = CreateFontW(
                -style.size,          // height, in character (not cell) pixels
                0,                    // width
                0,                    // escapement
                0,                    // orientation
                weight.0 as i32,      // weight
                0,                    // italic
                0,                    // underline
                0,                    // strikeout
                DEFAULT_CHARSET,      // charset
                OUT_DEFAULT_PRECIS,   // outprecision
                CLIP_DEFAULT_PRECIS,  // clipprecision
                quality,              // quality
                0,                    // pitchandfamily
                PCWSTR::from_raw(face_name.as_ptr()),
            );

            if hfont.is_invalid() {
                warn!(family = %style.family, "failed to create font");
                return Err(Error::Windows(GetLastError()));
            }

            Ok(Rc::new(Font { hfont }))
        }
    }
}

type FontKey = (String, i32, bool);

/// Measures text by selecting a font into a memory DC and asking GDI for
/// the extent. Fonts are created on first use of each style.
pub struct GdiMeasure {
    hdc: HDC,
    fallback: Rc<Font>,
    fonts: RefCell<HashMap<FontKey, Rc<Font>>>,
}

impl Drop for GdiMeasure {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.hdc);
        }
    }
}

fn font_key(style: &TextStyle) -> FontKey {
    (style.family.clone(), style.size, style.bold)
}

impl GdiMeasure {
    pub fn new(style: &TextStyle) -> Result<Self> {
        let fallback = Font::new(style)?;
        unsafe {
            let hdc = CreateCompatibleDC(None);
            if hdc.is_invalid() {
                warn!("failed to create memory DC");
                return Err(Error::Windows(GetLastError()));
            }
            let mut fonts = HashMap::new();
            fonts.insert(font_key(style), Rc::clone(&fallback));
            Ok(Self {
                hdc,
                fallback,
                fonts: RefCell::new(fonts),
            })
        }
    }

    fn font_for(&self, style: &TextStyle) -> Rc<Font> {
        let key = font_key(style);
        if let Some(font) = self.fonts.borrow().get(&key) {
            return Rc::clone(font);
        }
        let font = match Font::new(style) {
            Ok(font) => font,
            Err(e) => {
                warn!(?e, "using fallback font");
                Rc::clone(&self.fallback)
            }
        };
        self.fonts.borrow_mut().insert(key, Rc::clone(&font));
        font
    }
}

impl TextMeasure for GdiMeasure {
    fn text_size(&self, style: &TextStyle, text: &str) -> Size {
        let font = self.font_for(style);
        let chars: Vec<u16> = text.encode_utf16().collect();
        unsafe {
            let old = SelectObject(self.hdc, font.hfont.into());
            let mut size = SIZE::default();
            let ok = GetTextExtentPoint32W(self.hdc, &chars, &mut size).as_bool();
            SelectObject(self.hdc, old);
            if !ok {
                warn!("GetTextExtentPoint32W failed");
                return Size::default();
            }
            Size::new(size.cx, size.cy)
        }
    }
}

//! Shared helpers for decoding generated icons

#![allow(dead_code)]

pub const BACKGROUND: [u8; 3] = [0x1D, 0xA1, 0xF2];
pub const WHITE: [u8; 3] = [0xFF, 0xFF, 0xFF];

pub struct Decoded {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    pub bytes: Vec<u8>,
}

impl Decoded {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.bytes[i], self.bytes[i + 1], self.bytes[i + 2]]
    }

    pub fn corners(&self) -> [[u8; 3]; 4] {
        let (w, h) = (self.width - 1, self.height - 1);
        [self.pixel(0, 0), self.pixel(w, 0), self.pixel(0, h), self.pixel(w, h)]
    }

    /// Pixels strictly inside the central horizontal and vertical thirds
    pub fn central_third(&self) -> Vec<[u8; 3]> {
        let (lo_x, hi_x) = (self.width / 3, self.width - self.width / 3);
        let (lo_y, hi_y) = (self.height / 3, self.height - self.height / 3);
        let mut out = Vec::new();
        for y in lo_y..hi_y {
            for x in lo_x..hi_x {
                out.push(self.pixel(x, y));
            }
        }
        out
    }
}

pub fn decode(png_data: &[u8]) -> Decoded {
    let decoder = png::Decoder::new(png_data);
    let mut reader = decoder.read_info().expect("decode");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("frame");
    buf.truncate(info.buffer_size());
    Decoded {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        bytes: buf,
    }
}

//! 字符流抽象
//!
//! 从字节流增量解码 UTF-8，提供单字符回退和位置追踪。
//! 非法编码解码为 U+FFFD，交给扫描器按普通字符分类。

use std::collections::VecDeque;
use std::io::{self, BufRead};

use super::token::Position;

/// 字符流
///
/// 包装任意 `BufRead`，每次产出一个字符。结束标识符/整数时多读的那个字符
/// 通过 [`CharStream::unread`] 放回，下一次读取会先取回它。
pub struct CharStream<R> {
    reader: R,
    /// 非法序列退回的字节
    pending: VecDeque<u8>,
    /// 单字符回退槽
    pushback: Option<char>,
    /// 下一个字符的位置
    position: Position,
    /// 上一个已读字符的位置（回退时恢复）
    previous: Position,
}

impl<R: BufRead> CharStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            pushback: None,
            position: Position::start(),
            previous: Position::start(),
        }
    }

    /// 下一个字符所在位置
    pub fn position(&self) -> Position {
        self.position
    }

    /// 读取并消费一个字符
    ///
    /// # Returns
    /// - `Ok(Some(c))` - 成功读取
    /// - `Ok(None)` - 输入结束
    /// - `Err(e)` - 底层读取失败
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        let c = match self.pushback.take() {
            Some(c) => c,
            None => match self.decode()? {
                Some(c) => c,
                None => return Ok(None),
            },
        };

        self.previous = self.position;
        self.position = self.position.advance(c);
        Ok(Some(c))
    }

    /// 放回刚读到的字符，只支持一个
    pub fn unread(&mut self, c: char) {
        debug_assert!(self.pushback.is_none(), "pushback slot already occupied");
        self.pushback = Some(c);
        self.position = self.previous;
    }

    /// 解码一个字符
    ///
    /// 非法或截断的序列只消费引导字节，产出 U+FFFD；
    /// 已读的后续字节退回字节队列，各自重新解码。
    fn decode(&mut self) -> io::Result<Option<char>> {
        let lead = match self.read_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = match utf8_sequence_length(lead) {
            Some(width) => width,
            None => return Ok(Some(char::REPLACEMENT_CHARACTER)),
        };

        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < width {
            match self.read_byte()? {
                Some(byte) => {
                    bytes[len] = byte;
                    len += 1;
                    if byte & 0xC0 != 0x80 {
                        break;
                    }
                }
                None => break,
            }
        }

        let decoded = std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next());
        match decoded {
            Some(c) if len == width => Ok(Some(c)),
            _ => {
                self.pending.extend(&bytes[1..len]);
                Ok(Some(char::REPLACEMENT_CHARACTER))
            }
        }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        if let Some(byte) = self.pending.pop_front() {
            return Ok(Some(byte));
        }

        loop {
            let byte = match self.reader.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => buf[0],
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.reader.consume(1);
            return Ok(Some(byte));
        }
    }
}

/// 根据引导字节计算 UTF-8 序列长度
fn utf8_sequence_length(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(input: &[u8]) -> io::Result<String> {
        let mut stream = CharStream::new(input);
        let mut out = String::new();
        while let Some(c) = stream.read_char()? {
            out.push(c);
        }
        Ok(out)
    }

    #[test]
    fn test_read_ascii() {
        assert_eq!(read_all(b"ab c").unwrap(), "ab c");
    }

    #[test]
    fn test_read_multibyte() {
        assert_eq!(read_all("é€😀".as_bytes()).unwrap(), "é€😀");
    }

    #[test]
    fn test_invalid_byte_decodes_to_replacement() {
        assert_eq!(read_all(&[b'a', 0xFF, b'b']).unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_truncated_sequence_at_eof() {
        assert_eq!(read_all(&[0xE2, 0x82]).unwrap(), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_broken_sequence_keeps_following_char() {
        // 0xE2 缺少第二个后续字节，'A' 原样保留
        assert_eq!(read_all(&[0xE2, 0x82, b'A']).unwrap(), "\u{FFFD}\u{FFFD}A");
    }

    #[test]
    fn test_overlong_encoding_is_replaced_per_byte() {
        assert_eq!(
            read_all(&[0xE0, 0x80, 0x80]).unwrap(),
            "\u{FFFD}\u{FFFD}\u{FFFD}"
        );
    }

    #[test]
    fn test_replacement_advances_one_column() {
        let mut stream = CharStream::new(&[0xFF, b'x'][..]);
        stream.read_char().unwrap();
        assert_eq!(stream.position(), Position { line: 1, column: 2 });
    }

    #[test]
    fn test_unread_returns_same_char() {
        let mut stream = CharStream::new(&b"xy"[..]);
        assert_eq!(stream.read_char().unwrap(), Some('x'));
        let y = stream.read_char().unwrap().unwrap();
        stream.unread(y);
        assert_eq!(stream.read_char().unwrap(), Some('y'));
        assert_eq!(stream.read_char().unwrap(), None);
    }

    #[test]
    fn test_position_tracking_with_unread() {
        let mut stream = CharStream::new(&b"a\nb"[..]);
        stream.read_char().unwrap();
        let newline = stream.read_char().unwrap().unwrap();
        assert_eq!(stream.position(), Position { line: 2, column: 1 });

        stream.unread(newline);
        assert_eq!(stream.position(), Position { line: 1, column: 2 });

        stream.read_char().unwrap();
        stream.read_char().unwrap();
        assert_eq!(stream.position(), Position { line: 2, column: 2 });
    }
}

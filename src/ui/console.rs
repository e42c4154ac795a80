//! 终端交互
//!
//! 编排层只通过 [`Console`] 与用户交互，测试中替换为脚本化实现

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::io::{self, BufRead, IsTerminal, Write};

use crate::error::{AppError, AppResult};

/// 用户交互能力
pub trait Console {
    fn show(&mut self, text: &str);
    fn success(&mut self, text: &str);
    fn warn(&mut self, text: &str);
    fn error(&mut self, text: &str);

    /// 读取一行输入，输入结束时返回 None
    fn ask(&mut self, label: &str) -> AppResult<Option<String>>;

    /// 读取敏感输入（密钥、密码）
    fn ask_secret(&mut self, label: &str) -> AppResult<Option<String>> {
        self.ask(label)
    }

    /// 从选项中选择一项，返回下标；支持输入序号或选项文字
    fn choose(&mut self, label: &str, options: &[&str]) -> AppResult<Option<usize>> {
        loop {
            self.show(label);
            for (i, option) in options.iter().enumerate() {
                self.show(&format!("  {}. {}", i + 1, option));
            }
            let Some(answer) = self.ask(">")? else {
                return Ok(None);
            };
            if let Some(idx) = parse_choice(&answer, options) {
                return Ok(Some(idx));
            }
            self.warn(&format!("? {}", answer.trim()));
        }
    }
}

/// 解析选项输入：序号（从 1 开始）或忽略大小写的选项文字
pub fn parse_choice(answer: &str, options: &[&str]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(n) = answer.parse::<usize>() {
        return (1..=options.len()).contains(&n).then(|| n - 1);
    }
    options
        .iter()
        .position(|o| o.trim_end_matches(':').eq_ignore_ascii_case(answer))
}

/// 密码输入时单个按键的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKey {
    Continue,
    Submit,
    Cancel,
}

/// 把一个按键应用到已输入的内容上
pub fn apply_secret_key(buffer: &mut String, key: KeyEvent) -> SecretKey {
    if key.kind != KeyEventKind::Press {
        return SecretKey::Continue;
    }
    match key.code {
        KeyCode::Enter => SecretKey::Submit,
        KeyCode::Char('c') | KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            SecretKey::Cancel
        }
        KeyCode::Esc => SecretKey::Cancel,
        KeyCode::Backspace => {
            buffer.pop();
            SecretKey::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            SecretKey::Continue
        }
        _ => SecretKey::Continue,
    }
}

/// 离开作用域时恢复终端模式
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// 标准输入输出实现
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&mut self, label: &str) -> AppResult<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", label).map_err(|e| AppError::file_write_failed("<stdout>", e))?;
        stdout
            .flush()
            .map_err(|e| AppError::file_write_failed("<stdout>", e))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| AppError::file_read_failed("<stdin>", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// 关闭回显读取一行，每个字符显示为 `*`
    fn read_masked(&mut self, label: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout();
        write!(stdout, "{} ", label)?;
        stdout.flush()?;

        let mut buffer = String::new();
        let outcome = {
            let _raw = RawModeGuard::enable()?;
            loop {
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                let before = buffer.chars().count();
                match apply_secret_key(&mut buffer, key) {
                    SecretKey::Continue => {
                        let after = buffer.chars().count();
                        if after > before {
                            write!(stdout, "*")?;
                        } else if after < before {
                            write!(stdout, "\u{8} \u{8}")?;
                        }
                        stdout.flush()?;
                    }
                    done => break done,
                }
            }
        };
        writeln!(stdout)?;

        Ok((outcome == SecretKey::Submit).then_some(buffer))
    }
}

impl Console for TerminalConsole {
    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn success(&mut self, text: &str) {
        println!("✅ {}", text);
    }

    fn warn(&mut self, text: &str) {
        println!("⚠️ {}", text);
    }

    fn error(&mut self, text: &str) {
        eprintln!("❌ {}", text);
    }

    fn ask(&mut self, label: &str) -> AppResult<Option<String>> {
        self.read_line(label)
    }

    fn ask_secret(&mut self, label: &str) -> AppResult<Option<String>> {
        // 管道输入没有终端可以关闭回显
        if !io::stdin().is_terminal() {
            return self.read_line(label);
        }
        self.read_masked(label)
            .map_err(|e| AppError::file_read_failed("<stdin>", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choice_by_number_and_label() {
        let options = ["posts", "pages", "custom"];
        assert_eq!(parse_choice("2", &options), Some(1));
        assert_eq!(parse_choice(" Custom ", &options), Some(2));
        assert_eq!(parse_choice("0", &options), None);
        assert_eq!(parse_choice("4", &options), None);
        assert_eq!(parse_choice("media", &options), None);
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_secret_keys_edit_buffer() {
        let mut buffer = String::new();
        for c in "sk-x".chars() {
            assert_eq!(apply_secret_key(&mut buffer, press(KeyCode::Char(c))), SecretKey::Continue);
        }
        apply_secret_key(&mut buffer, press(KeyCode::Backspace));
        assert_eq!(buffer, "sk-");
        assert_eq!(apply_secret_key(&mut buffer, press(KeyCode::Enter)), SecretKey::Submit);
    }

    #[test]
    fn test_secret_input_can_be_cancelled() {
        let mut buffer = "pw".to_string();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(apply_secret_key(&mut buffer, ctrl_c), SecretKey::Cancel);
        assert_eq!(apply_secret_key(&mut buffer, press(KeyCode::Esc)), SecretKey::Cancel);
        assert_eq!(buffer, "pw");
    }
}

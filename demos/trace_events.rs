//! Print every event emitted by the parser for a sample byte stream.
//!
//! Run with `RUST_LOG=trace` to also see the parser's own trace output.

use std::fmt::Arguments;

use vtscan::{Actor, Parser, ParserError};

#[derive(Default)]
struct LoggingActor {
    seq: usize,
}

impl LoggingActor {
    fn emit(&mut self, event: Arguments<'_>) {
        self.seq += 1;
        println!("{:02}: {event}", self.seq);
    }
}

impl Actor for LoggingActor {
    fn print(&mut self, ch: char) {
        self.emit(format_args!("print {ch:?}"));
    }

    fn print_text(&mut self, text: &str, cell_count: usize) {
        self.emit(format_args!("print_text {text:?} ({cell_count} cells)"));
    }

    fn execute(&mut self, byte: u8) {
        self.emit(format_args!("execute 0x{byte:02X}"));
    }

    fn clear(&mut self) {
        self.emit(format_args!("clear"));
    }

    fn collect(&mut self, byte: u8) {
        self.emit(format_args!("collect {:?}", char::from(byte)));
    }

    fn collect_leader(&mut self, byte: u8) {
        self.emit(format_args!("collect_leader {:?}", char::from(byte)));
    }

    fn param(&mut self, byte: u8) {
        self.emit(format_args!("param {:?}", char::from(byte)));
    }

    fn param_digit(&mut self, byte: u8) {
        self.emit(format_args!("param_digit {:?}", char::from(byte)));
    }

    fn param_separator(&mut self) {
        self.emit(format_args!("param_separator"));
    }

    fn esc_dispatch(&mut self, byte: u8) {
        self.emit(format_args!("esc_dispatch {:?}", char::from(byte)));
    }

    fn csi_dispatch(&mut self, byte: u8) {
        self.emit(format_args!("csi_dispatch {:?}", char::from(byte)));
    }

    fn hook(&mut self, byte: u8) {
        self.emit(format_args!("hook {:?}", char::from(byte)));
    }

    fn put(&mut self, byte: u8) {
        self.emit(format_args!("put 0x{byte:02X}"));
    }

    fn unhook(&mut self) {
        self.emit(format_args!("unhook"));
    }

    fn osc_start(&mut self) {
        self.emit(format_args!("osc_start"));
    }

    fn osc_put(&mut self, byte: u8) {
        self.emit(format_args!("osc_put 0x{byte:02X}"));
    }

    fn osc_end(&mut self) {
        self.emit(format_args!("osc_end"));
    }

    fn error(&mut self, error: ParserError) {
        self.emit(format_args!("error: {error}"));
    }
}

fn main() {
    env_logger::init();

    let mut parser = Parser::new();
    let mut actor = LoggingActor::default();

    let bytes = b"Hello \x1b[1mworld\x1b[0m!\n\
                  \x1b]0;demo title\x07\
                  \x1bP1$q\"p\x1b\\";

    parser.parse_fragment(bytes, &mut actor);
}

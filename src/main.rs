//! Walks through the operations of each container and prints the results.

use std::io::{self, Write};
use clap::{Parser, ValueEnum};
use containers::{ArrayQueue, ArrayStack, Dict, HtDict, Queue, Stack};

#[derive(Parser)]
#[command(name = "containers-demo", about = "Exercise the stack, queue and dictionary containers", version)]
struct Cli {
  /// Which demonstration to run.
  #[arg(long, value_enum, default_value_t = Section::All)]
  section: Section,

  /// After clearing, show the error returned by the checked operations on
  /// the empty containers instead of the default-value fallbacks.
  #[arg(long)]
  checked: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Section {
  Stack,
  Queue,
  Dictionary,
  All,
}

impl Section {
  fn includes(self, other: Section) -> bool {
    self == Section::All || self == other
  }
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  let stdout = io::stdout();
  run(&mut stdout.lock(), cli.section, cli.checked)
}

fn run<W: Write>(out: &mut W, section: Section, checked: bool) -> anyhow::Result<()> {
  let mut first = true;

  if section.includes(Section::Stack) {
    demo_stack(out, checked)?;
    first = false;
  }
  if section.includes(Section::Queue) {
    if !first {
      writeln!(out)?;
    }
    demo_queue(out, checked)?;
    first = false;
  }
  if section.includes(Section::Dictionary) {
    if !first {
      writeln!(out)?;
    }
    demo_dictionary(out)?;
  }

  Ok(())
}

fn demo_stack<W: Write>(out: &mut W, checked: bool) -> io::Result<()> {
  writeln!(out, "=== Testing Stack Implementation ===")?;
  let mut stack = ArrayStack::new();
  stack.push(1);
  stack.push(2);
  stack.push(3);
  writeln!(out, "Stack after pushing 1,2,3: {}", stack)?;
  writeln!(out, "Popped value: {}", stack.pop_or_default())?;
  writeln!(out, "Popped value: {}", stack.pop_or_default())?;
  writeln!(out, "Stack after pop: {}", stack)?;
  writeln!(out, "Peek value: {}", stack.peek_or_default())?;
  writeln!(out, "Is stack empty?: {}", stack.is_empty())?;
  writeln!(out, "Stack size: {}", stack.size())?;
  stack.clear();
  writeln!(out, "Is stack empty after clear?: {}", stack.is_empty())?;

  if checked {
    match stack.try_pop() {
      Ok(v) => writeln!(out, "Popped value: {}", v)?,
      Err(e) => writeln!(out, "Pop on empty stack: {}", e)?,
    }
  } else {
    writeln!(out, "Pop on empty stack: {}", stack.pop_or_default())?;
  }

  Ok(())
}

fn demo_queue<W: Write>(out: &mut W, checked: bool) -> io::Result<()> {
  writeln!(out, "=== Testing Queue Implementation ===")?;
  let mut queue = ArrayQueue::new();
  queue.enqueue(1);
  queue.enqueue(2);
  queue.enqueue(3);
  writeln!(out, "Queue after adding 1,2,3: {}", queue)?;
  writeln!(out, "Dequeued value: {}", queue.dequeue_or_default())?;
  writeln!(out, "Dequeued value: {}", queue.dequeue_or_default())?;
  writeln!(out, "Queue after dequeue: {}", queue)?;
  writeln!(out, "Front value: {}", queue.front_or_default())?;
  writeln!(out, "Is queue empty?: {}", queue.is_empty())?;
  writeln!(out, "Queue size: {}", queue.size())?;
  queue.clear();
  writeln!(out, "Is queue empty after clear?: {}", queue.is_empty())?;

  if checked {
    match queue.try_dequeue() {
      Ok(v) => writeln!(out, "Dequeued value: {}", v)?,
      Err(e) => writeln!(out, "Dequeue on empty queue: {}", e)?,
    }
  } else {
    writeln!(out, "Dequeue on empty queue: {}", queue.dequeue_or_default())?;
  }

  Ok(())
}

fn demo_dictionary<W: Write>(out: &mut W) -> io::Result<()> {
  writeln!(out, "=== Testing Dictionary Implementation ===")?;
  let mut dictionary = HtDict::new();
  dictionary.add("key1", "value1");
  dictionary.add("key2", "value2");
  dictionary.add("key3", "value3");
  writeln!(out, "Current dictionary contents: {}", dictionary)?;
  dictionary.remove(&"key2");
  writeln!(out, "Dictionary after removing key2: {}", dictionary)?;
  writeln!(out, "Value for key1: {}", dictionary.get_or_default(&"key1"))?;
  writeln!(out, "key4 exists in dictionary: {}", dictionary.contains(&"key4"))?;

  Ok(())
}

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;

use tokval::tree::{Features, TreeReader, Value, source_from_json, value_to_json};

/// Entry operation selector for the read command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ReadAs {
	/// Generic read of whatever the document root is.
	Value,
	/// Keyed-collection read; the root must be an object or null.
	Map,
	/// Sequence read; the root must be an array or null.
	Seq,
	/// Fixed-size array read; the root must be an array or null.
	Array,
}

/// Read a JSON file through the engine and print the materialized tree.
pub fn run(path: PathBuf, read_as: ReadAs, decimal_floats: bool, fail_on_duplicate_keys: bool, max_depth: Option<u32>, json: bool) -> tokval::tree::Result<()> {
	let text = fs::read_to_string(&path)?;
	let doc: serde_json::Value = serde_json::from_str(&text)?;
	let mut source = source_from_json(&doc);

	let mut features = Features::empty();
	features.set(Features::DECIMAL_FLOATS, decimal_floats);
	features.set(Features::FAIL_ON_DUPLICATE_KEYS, fail_on_duplicate_keys);

	let mut reader = TreeReader::new().with_features(features);
	if let Some(max_depth) = max_depth {
		reader = reader.with_max_depth(max_depth);
	}

	// Typed entries fold their root-null default back into a plain null.
	let value = match read_as {
		ReadAs::Value => reader.bind(&mut source).read_value()?,
		ReadAs::Map => reader.bind(&mut source).read_map()?.map_or(Value::Null, Value::Map),
		ReadAs::Seq => reader.bind(&mut source).read_sequence()?.map_or(Value::Null, Value::Sequence),
		ReadAs::Array => reader.bind(&mut source).read_array()?.map_or(Value::Null, Value::Array),
	};

	if json {
		println!("{}", serde_json::to_string(&value_to_json(&value))?);
	} else {
		print_value(&value, 0);
	}

	Ok(())
}

fn print_value(value: &Value, indent: usize) {
	let pad = " ".repeat(indent);
	match value {
		Value::Null => println!("{pad}null"),
		Value::Bool(v) => println!("{pad}{v}"),
		Value::I32(v) => println!("{pad}{v}"),
		Value::I64(v) => println!("{pad}{v}"),
		Value::BigInt(v) => println!("{pad}{v}"),
		Value::F32(v) => println!("{pad}{v}"),
		Value::F64(v) => println!("{pad}{v}"),
		Value::Decimal(v) => println!("{pad}{v}"),
		Value::String(v) => println!("{pad}\"{v}\""),
		Value::Bytes(v) => println!("{pad}bytes[{}]", v.len()),
		Value::Sequence(items) => print_items(items, &pad, indent),
		Value::Array(items) => print_items(items, &pad, indent),
		Value::Map(map) => {
			println!("{pad}{{");
			for (key, item) in map {
				if item.is_container() {
					println!("{pad}  {key} =");
					print_value(item, indent + 4);
				} else {
					print!("{pad}  {key} = ");
					print_value(item, 0);
				}
			}
			println!("{pad}}}");
		}
	}
}

fn print_items(items: &[Value], pad: &str, indent: usize) {
	println!("{pad}[");
	for item in items {
		print_value(item, indent + 2);
	}
	println!("{pad}]");
}

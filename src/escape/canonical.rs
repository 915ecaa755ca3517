//! A [`Serializer`](ser::Serializer) into [`Value`] that rejects what JSON can't represent
//! and puts map entries into key order, so equal inputs always render identically.
//!
//! Struct fields keep their declaration order.

use serde::ser::{self, Error as _, Serialize};
use serde_json::{value::Serializer as ValueSerializer, Error, Map, Value};

pub(super) struct Canonical;

fn unsupported_float(value: f64) -> Error {
	let shown = if value.is_nan() {
		"NaN"
	} else if value.is_sign_positive() {
		"+Inf"
	} else {
		"-Inf"
	};
	Error::custom(format!("unsupported value: {}", shown))
}

fn map_key(key: Value) -> Result<String, Error> {
	match key {
		Value::String(key) => Ok(key),
		Value::Number(number) => Ok(number.to_string()),
		_ => Err(Error::custom("key must be a string")),
	}
}

impl ser::Serializer for Canonical {
	type Ok = Value;
	type Error = Error;

	type SerializeSeq = SeqBuilder;
	type SerializeTuple = SeqBuilder;
	type SerializeTupleStruct = SeqBuilder;
	type SerializeTupleVariant = VariantSeqBuilder;
	type SerializeMap = MapBuilder;
	type SerializeStruct = StructBuilder;
	type SerializeStructVariant = VariantStructBuilder;

	fn serialize_bool(self, v: bool) -> Result<Value, Error> {
		Ok(Value::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_i16(self, v: i16) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_i32(self, v: i32) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_i64(self, v: i64) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_i128(self, v: i128) -> Result<Value, Error> {
		ser::Serializer::serialize_i128(ValueSerializer, v)
	}

	fn serialize_u8(self, v: u8) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_u16(self, v: u16) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_u32(self, v: u32) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_u64(self, v: u64) -> Result<Value, Error> {
		Ok(v.into())
	}

	fn serialize_u128(self, v: u128) -> Result<Value, Error> {
		ser::Serializer::serialize_u128(ValueSerializer, v)
	}

	fn serialize_f32(self, v: f32) -> Result<Value, Error> {
		if !v.is_finite() {
			return Err(unsupported_float(f64::from(v)));
		}
		ser::Serializer::serialize_f32(ValueSerializer, v)
	}

	fn serialize_f64(self, v: f64) -> Result<Value, Error> {
		if !v.is_finite() {
			return Err(unsupported_float(v));
		}
		ser::Serializer::serialize_f64(ValueSerializer, v)
	}

	fn serialize_char(self, v: char) -> Result<Value, Error> {
		Ok(Value::String(v.to_string()))
	}

	fn serialize_str(self, v: &str) -> Result<Value, Error> {
		Ok(Value::String(v.to_owned()))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Value, Error> {
		Ok(Value::Array(v.iter().map(|&byte| byte.into()).collect()))
	}

	fn serialize_none(self) -> Result<Value, Error> {
		Ok(Value::Null)
	}

	fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Error> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<Value, Error> {
		Ok(Value::Null)
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, Error> {
		Ok(Value::Null)
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str) -> Result<Value, Error> {
		Ok(Value::String(variant.to_owned()))
	}

	fn serialize_newtype_struct<T: ?Sized + Serialize>(self, _name: &'static str, value: &T) -> Result<Value, Error> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: ?Sized + Serialize>(self, _name: &'static str, _variant_index: u32, variant: &'static str, value: &T) -> Result<Value, Error> {
		let mut object = Map::new();
		object.insert(variant.to_owned(), value.serialize(self)?);
		Ok(Value::Object(object))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SeqBuilder, Error> {
		Ok(SeqBuilder {
			elements: Vec::with_capacity(len.unwrap_or(0)),
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<SeqBuilder, Error> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SeqBuilder, Error> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<VariantSeqBuilder, Error> {
		Ok(VariantSeqBuilder {
			variant,
			elements: Vec::with_capacity(len),
		})
	}

	fn serialize_map(self, len: Option<usize>) -> Result<MapBuilder, Error> {
		Ok(MapBuilder {
			entries: Vec::with_capacity(len.unwrap_or(0)),
			next_key: None,
		})
	}

	fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<StructBuilder, Error> {
		Ok(StructBuilder { fields: Map::new() })
	}

	fn serialize_struct_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str, _len: usize) -> Result<VariantStructBuilder, Error> {
		Ok(VariantStructBuilder { variant, fields: Map::new() })
	}
}

pub(super) struct SeqBuilder {
	elements: Vec<Value>,
}
impl ser::SerializeSeq for SeqBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
		self.elements.push(value.serialize(Canonical)?);
		Ok(())
	}

	fn end(self) -> Result<Value, Error> {
		Ok(Value::Array(self.elements))
	}
}
impl ser::SerializeTuple for SeqBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value, Error> {
		ser::SerializeSeq::end(self)
	}
}
impl ser::SerializeTupleStruct for SeqBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value, Error> {
		ser::SerializeSeq::end(self)
	}
}

pub(super) struct VariantSeqBuilder {
	variant: &'static str,
	elements: Vec<Value>,
}
impl ser::SerializeTupleVariant for VariantSeqBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
		self.elements.push(value.serialize(Canonical)?);
		Ok(())
	}

	fn end(self) -> Result<Value, Error> {
		let mut object = Map::new();
		object.insert(self.variant.to_owned(), Value::Array(self.elements));
		Ok(Value::Object(object))
	}
}

pub(super) struct MapBuilder {
	entries: Vec<(String, Value)>,
	next_key: Option<String>,
}
impl ser::SerializeMap for MapBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Error> {
		self.next_key = Some(map_key(key.serialize(Canonical)?)?);
		Ok(())
	}

	fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
		let key = self.next_key.take().ok_or_else(|| Error::custom("map value serialized before its key"))?;
		self.entries.push((key, value.serialize(Canonical)?));
		Ok(())
	}

	fn end(mut self) -> Result<Value, Error> {
		self.entries.sort_by(|(a, _), (b, _)| a.cmp(b));
		Ok(Value::Object(self.entries.into_iter().collect()))
	}
}

pub(super) struct StructBuilder {
	fields: Map<String, Value>,
}
impl ser::SerializeStruct for StructBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), Error> {
		self.fields.insert(key.to_owned(), value.serialize(Canonical)?);
		Ok(())
	}

	fn end(self) -> Result<Value, Error> {
		Ok(Value::Object(self.fields))
	}
}

pub(super) struct VariantStructBuilder {
	variant: &'static str,
	fields: Map<String, Value>,
}
impl ser::SerializeStructVariant for VariantStructBuilder {
	type Ok = Value;
	type Error = Error;

	fn serialize_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), Error> {
		self.fields.insert(key.to_owned(), value.serialize(Canonical)?);
		Ok(())
	}

	fn end(self) -> Result<Value, Error> {
		let mut object = Map::new();
		object.insert(self.variant.to_owned(), Value::Object(self.fields));
		Ok(Value::Object(object))
	}
}

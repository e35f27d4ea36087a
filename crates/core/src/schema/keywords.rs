//! Draft-04 JSON Schema keywords written by the assembler

pub const TYPE: &str = "type";
pub const PROPERTIES: &str = "properties";
pub const REQUIRED: &str = "required";
pub const ITEMS: &str = "items";
pub const REF: &str = "$ref";
pub const SCHEMA: &str = "$schema";

pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const PATTERN: &str = "pattern";
pub const MAXIMUM: &str = "maximum";
pub const EXCLUSIVE_MAXIMUM: &str = "exclusiveMaximum";
pub const MINIMUM: &str = "minimum";
pub const EXCLUSIVE_MINIMUM: &str = "exclusiveMinimum";
pub const ENUM: &str = "enum";
pub const UNIQUE_ITEMS: &str = "uniqueItems";
pub const MIN_ITEMS: &str = "minItems";
pub const MAX_ITEMS: &str = "maxItems";
pub const MULTIPLE_OF: &str = "multipleOf";
pub const MIN_LENGTH: &str = "minLength";
pub const MAX_LENGTH: &str = "maxLength";
pub const READONLY: &str = "readonly";

pub const OBJECT_TYPE: &str = "object";
pub const NULL_TYPE: &str = "null";

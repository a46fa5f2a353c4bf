//! Data-source parsing: projects the recipes XML document into `Recipe`
//! records, preserving document order.
//!
//! Projection is strict: a record missing any expected field, attribute, or
//! child collection fails the whole load with a typed error instead of
//! rendering a partial record.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::recipe::Recipe;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("malformed document: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("recipe {index}: missing {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("recipe {index}: bad {field} value {value:?}")]
    BadField {
        index: usize,
        field: &'static str,
        value: String,
    },
    #[error("recipe {index}: document truncated")]
    Truncated { index: usize },
}

/// Parse the full document. Order of the returned records matches document
/// order; any projection failure aborts the load.
pub fn parse_document(input: &str) -> Result<Vec<Recipe>, SourceError> {
    let mut reader = Reader::from_str(input);
    let mut recipes = Vec::new();

    loop {
        match reader.read_event().map_err(SourceError::Xml)? {
            Event::Start(e) if e.name().as_ref() == b"recipe" => {
                let recipe = parse_recipe(&mut reader, &e, recipes.len())?;
                recipes.push(recipe);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(recipes)
}

/// Linear scan, first match, case-sensitive. Duplicate ids resolve to the
/// first record encountered.
pub fn find_recipe<'a>(records: &'a [Recipe], id: &str) -> Option<&'a Recipe> {
    records.iter().find(|r| r.id == id)
}

fn parse_recipe(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart<'_>,
    index: usize,
) -> Result<Recipe, SourceError> {
    let mut id = None;
    let mut category = None;
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        match attr.key.as_ref() {
            b"id" => id = Some(attr.unescape_value()?.into_owned()),
            b"category" => category = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    let mut name = None;
    let mut description = None;
    let mut image = None;
    let mut difficulty = None;
    let mut prep_time = None;
    let mut cook_time = None;
    let mut servings = None;
    let mut cost = None;
    let mut cost_currency = None;
    let mut ingredients = None;
    let mut steps = None;
    let mut tips = None;

    loop {
        match reader.read_event().map_err(SourceError::Xml)? {
            Event::Start(e) => match e.name().as_ref() {
                b"name" => name = Some(read_text(reader, &e)?),
                b"description" => description = Some(read_text(reader, &e)?),
                b"image" => image = Some(read_text(reader, &e)?),
                b"difficulty" => difficulty = Some(read_text(reader, &e)?),
                b"prepTime" => prep_time = Some(read_u32(reader, &e, index, "prepTime")?),
                b"cookTime" => cook_time = Some(read_u32(reader, &e, index, "cookTime")?),
                b"servings" => servings = Some(read_u32(reader, &e, index, "servings")?),
                b"cost" => {
                    cost_currency = read_attr(&e, b"currency")?;
                    cost = Some(read_text(reader, &e)?);
                }
                b"ingredients" => {
                    ingredients = Some(read_items(reader, b"ingredients", b"ingredient", index)?)
                }
                b"steps" => steps = Some(read_items(reader, b"steps", b"step", index)?),
                b"tips" => tips = Some(read_items(reader, b"tips", b"tip", index)?),
                _ => {
                    reader.read_to_end(e.name()).map_err(SourceError::Xml)?;
                }
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"name" => name = Some(String::new()),
                b"description" => description = Some(String::new()),
                b"image" => image = Some(String::new()),
                b"difficulty" => difficulty = Some(String::new()),
                b"cost" => {
                    cost_currency = read_attr(&e, b"currency")?;
                    cost = Some(String::new());
                }
                b"ingredients" => ingredients = Some(Vec::new()),
                b"steps" => steps = Some(Vec::new()),
                b"tips" => tips = Some(Vec::new()),
                _ => {}
            },
            Event::End(e) if e.name().as_ref() == b"recipe" => break,
            Event::Eof => return Err(SourceError::Truncated { index }),
            _ => {}
        }
    }

    Ok(Recipe {
        id: require(id, index, "id")?,
        category: require(category, index, "category")?,
        name: require(name, index, "name")?,
        description: require(description, index, "description")?,
        image: require(image, index, "image")?,
        difficulty: require(difficulty, index, "difficulty")?,
        prep_time: require(prep_time, index, "prepTime")?,
        cook_time: require(cook_time, index, "cookTime")?,
        servings: require(servings, index, "servings")?,
        cost: require(cost, index, "cost")?,
        cost_currency: require(cost_currency, index, "currency")?,
        ingredients: require(ingredients, index, "ingredients")?,
        steps: require(steps, index, "steps")?,
        tips: require(tips, index, "tips")?,
    })
}

fn require<T>(value: Option<T>, index: usize, field: &'static str) -> Result<T, SourceError> {
    value.ok_or(SourceError::MissingField { index, field })
}

fn read_attr(e: &BytesStart<'_>, key: &[u8]) -> Result<Option<String>, SourceError> {
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn read_text(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<String, SourceError> {
    Ok(reader
        .read_text(e.name())
        .map_err(SourceError::Xml)?
        .trim()
        .to_string())
}

fn read_u32(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
    index: usize,
    field: &'static str,
) -> Result<u32, SourceError> {
    let raw = read_text(reader, e)?;
    raw.parse::<u32>().map_err(|_| SourceError::BadField {
        index,
        field,
        value: raw.clone(),
    })
}

fn read_items(
    reader: &mut Reader<&[u8]>,
    end: &'static [u8],
    item: &'static [u8],
    index: usize,
) -> Result<Vec<String>, SourceError> {
    let mut out = Vec::new();
    loop {
        match reader.read_event().map_err(SourceError::Xml)? {
            Event::Start(e) if e.name().as_ref() == item => out.push(read_text(reader, &e)?),
            Event::Start(e) => {
                reader.read_to_end(e.name()).map_err(SourceError::Xml)?;
            }
            Event::Empty(e) if e.name().as_ref() == item => out.push(String::new()),
            Event::End(e) if e.name().as_ref() == end => return Ok(out),
            Event::Eof => return Err(SourceError::Truncated { index }),
            _ => {}
        }
    }
}

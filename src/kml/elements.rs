//! KML element catalog
//!
//! Typed constructors for the KML elements this crate knows by name.
//! Containers take a list of items (attributes and children), leaves take
//! their scalar value. Anything not listed here can still be built with
//! [`Element::new`] or the scalar helpers at the bottom of this file.
//!
//! Reference: <https://developers.google.com/kml/documentation/kmlreference>

use super::attributes::{attr, attr_bool};
use crate::core::text::{format_bool, format_float};
use crate::dom::{Element, Item};

// ============================================================================
// Element names
// ============================================================================

pub const ELEM_ALTITUDE: &str = "altitude";
pub const ELEM_ALTITUDE_MODE: &str = "altitudeMode";
pub const ELEM_BALLOON_STYLE: &str = "BalloonStyle";
pub const ELEM_BG_COLOR: &str = "bgColor";
pub const ELEM_CAMERA: &str = "Camera";
pub const ELEM_COLOR: &str = "color";
pub const ELEM_COORDINATES: &str = "coordinates";
pub const ELEM_DATA: &str = "Data";
pub const ELEM_DESCRIPTION: &str = "description";
pub const ELEM_DISPLAY_MODE: &str = "displayMode";
pub const ELEM_DISPLAY_NAME: &str = "displayName";
pub const ELEM_DOCUMENT: &str = "Document";
pub const ELEM_EXTENDED_DATA: &str = "ExtendedData";
pub const ELEM_FOLDER: &str = "Folder";
pub const ELEM_GX_OPTION: &str = "gx:option";
pub const ELEM_GX_TIME_STAMP: &str = "gx:TimeStamp";
pub const ELEM_GX_VIEWER_OPTIONS: &str = "gx:ViewerOptions";
pub const ELEM_HEADING: &str = "heading";
pub const ELEM_KML: &str = "kml";
pub const ELEM_LABEL_STYLE: &str = "LabelStyle";
pub const ELEM_LATITUDE: &str = "latitude";
pub const ELEM_LINE_STRING: &str = "LineString";
pub const ELEM_LINE_STYLE: &str = "LineStyle";
pub const ELEM_LONGITUDE: &str = "longitude";
pub const ELEM_MULTI_GEOMETRY: &str = "MultiGeometry";
pub const ELEM_NAME: &str = "name";
pub const ELEM_OUTLINE: &str = "outline";
pub const ELEM_PLACEMARK: &str = "Placemark";
pub const ELEM_POLY_STYLE: &str = "PolyStyle";
pub const ELEM_ROLL: &str = "roll";
pub const ELEM_SCALE: &str = "scale";
pub const ELEM_SCHEMA: &str = "Schema";
pub const ELEM_SCHEMA_DATA: &str = "SchemaData";
pub const ELEM_SIMPLE_DATA: &str = "SimpleData";
pub const ELEM_SIMPLE_FIELD: &str = "SimpleField";
pub const ELEM_SNIPPET: &str = "Snippet";
pub const ELEM_STYLE: &str = "Style";
pub const ELEM_STYLE_URL: &str = "styleUrl";
pub const ELEM_TESSELLATE: &str = "tessellate";
pub const ELEM_TEXT: &str = "text";
pub const ELEM_TILT: &str = "tilt";
pub const ELEM_WHEN: &str = "when";
pub const ELEM_WIDTH: &str = "width";

// ============================================================================
// Value constants
// ============================================================================

/// `altitudeMode` values
pub const ALTITUDE_MODE_RELATIVE_TO_GROUND: &str = "relativeToGround";
pub const ALTITUDE_MODE_CLAMP_TO_GROUND: &str = "clampToGround";
pub const ALTITUDE_MODE_ABSOLUTE: &str = "absolute";

/// `displayMode` values
pub const DISPLAY_MODE_DEFAULT: &str = "default";
pub const DISPLAY_MODE_HIDE: &str = "hide";

/// `SimpleField` type values
pub const SF_TYPE_STRING: &str = "string";
pub const SF_TYPE_INT: &str = "int";
pub const SF_TYPE_UINT: &str = "uint";
pub const SF_TYPE_SHORT: &str = "short";
pub const SF_TYPE_USHORT: &str = "ushort";
pub const SF_TYPE_FLOAT: &str = "float";
pub const SF_TYPE_DOUBLE: &str = "double";
pub const SF_TYPE_BOOL: &str = "bool";

// ============================================================================
// Constructors
// ============================================================================

macro_rules! container {
    ($($fn_name:ident => $tag:ident),+ $(,)?) => {
        $(
            #[doc = concat!("New container element, see [`", stringify!($tag), "`]")]
            pub fn $fn_name<I>(items: I) -> Element
            where
                I: IntoIterator,
                I::Item: Into<Item>,
            {
                Element::new($tag, items)
            }
        )+
    };
}

macro_rules! leaf {
    ($builder:ident, $value:ty; $($fn_name:ident => $tag:ident),+ $(,)?) => {
        $(
            #[doc = concat!("New leaf element, see [`", stringify!($tag), "`]")]
            pub fn $fn_name(value: $value) -> Element {
                $builder($tag, value, Vec::<Item>::new())
            }
        )+
    };
}

container! {
    balloon_style => ELEM_BALLOON_STYLE,
    camera => ELEM_CAMERA,
    document => ELEM_DOCUMENT,
    extended_data => ELEM_EXTENDED_DATA,
    folder => ELEM_FOLDER,
    gx_viewer_options => ELEM_GX_VIEWER_OPTIONS,
    label_style => ELEM_LABEL_STYLE,
    line_string => ELEM_LINE_STRING,
    line_style => ELEM_LINE_STYLE,
    multi_geometry => ELEM_MULTI_GEOMETRY,
    placemark => ELEM_PLACEMARK,
    poly_style => ELEM_POLY_STYLE,
    style => ELEM_STYLE,
}

leaf! {
    string_element, &str;
    altitude_mode => ELEM_ALTITUDE_MODE,
    bg_color => ELEM_BG_COLOR,
    color => ELEM_COLOR,
    coordinates => ELEM_COORDINATES,
    description => ELEM_DESCRIPTION,
    display_mode => ELEM_DISPLAY_MODE,
    display_name => ELEM_DISPLAY_NAME,
    name => ELEM_NAME,
    snippet => ELEM_SNIPPET,
    style_url => ELEM_STYLE_URL,
    text => ELEM_TEXT,
    when => ELEM_WHEN,
}

leaf! {
    float_element, f64;
    altitude => ELEM_ALTITUDE,
    heading => ELEM_HEADING,
    latitude => ELEM_LATITUDE,
    longitude => ELEM_LONGITUDE,
    roll => ELEM_ROLL,
    scale => ELEM_SCALE,
    tilt => ELEM_TILT,
    width => ELEM_WIDTH,
}

leaf! {
    bool_element, bool;
    outline => ELEM_OUTLINE,
    tessellate => ELEM_TESSELLATE,
}

/// `Data` element with its `name` attribute
pub fn data<I>(name: &str, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    with_leading(ELEM_DATA, vec![attr("name", name).into()], items)
}

/// `Schema` element with `name` and `id` attributes
pub fn schema<I>(id: &str, name: &str, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    with_leading(ELEM_SCHEMA, vec![attr("name", name).into(), attr("id", id).into()], items)
}

/// `SchemaData` element referencing a schema
pub fn schema_data<I>(schema_url: &str, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    with_leading(ELEM_SCHEMA_DATA, vec![attr("schemaUrl", schema_url).into()], items)
}

/// `SimpleData` element: a named string value
pub fn simple_data(name: &str, value: &str) -> Element {
    string_element(ELEM_SIMPLE_DATA, value, [attr("name", name)])
}

/// `SimpleField` element declaring a typed schema field
pub fn simple_field<I>(typ: &str, name: &str, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    with_leading(
        ELEM_SIMPLE_FIELD,
        vec![attr("type", typ).into(), attr("name", name).into()],
        items,
    )
}

/// `gx:option` element toggling a viewer option
pub fn gx_option(name: &str, enabled: bool) -> Element {
    Element::new(ELEM_GX_OPTION, [attr("name", name), attr_bool("enabled", enabled)])
}

/// `gx:TimeStamp` element; `when` is an XML Schema dateTime such as
/// `2020-01-01T00:00:00Z`
pub fn gx_time_stamp(when_value: &str) -> Element {
    Element::new(ELEM_GX_TIME_STAMP, [when(when_value)])
}

fn with_leading<I>(tag: &str, mut leading: Vec<Item>, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    leading.extend(items.into_iter().map(Into::into));
    Element::new(tag, leading)
}

// ============================================================================
// Scalar helpers
// ============================================================================

/// Element with text content
pub fn string_element<I>(name: &str, content: &str, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    let mut element = Element::new(name, items);
    element.set_content(content);
    element
}

/// Element with integer content
pub fn int_element<I>(name: &str, value: i64, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    string_element(name, &value.to_string(), items)
}

/// Element with float content, shortest round-trip decimal
pub fn float_element<I>(name: &str, value: f64, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    string_element(name, &format_float(value), items)
}

/// Element with boolean content, `1` or `0`
pub fn bool_element<I>(name: &str, value: bool, items: I) -> Element
where
    I: IntoIterator,
    I::Item: Into<Item>,
{
    string_element(name, format_bool(value), items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items;
    use crate::kml::attr_max_lines;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn none() -> Vec<Item> {
        Vec::new()
    }

    #[rstest]
    #[case(altitude(1.234), "<altitude>1.234</altitude>")]
    #[case(altitude_mode(ALTITUDE_MODE_ABSOLUTE), "<altitudeMode>absolute</altitudeMode>")]
    #[case(balloon_style(none()), "<BalloonStyle></BalloonStyle>")]
    #[case(bg_color("ffffffff"), "<bgColor>ffffffff</bgColor>")]
    #[case(camera(none()), "<Camera></Camera>")]
    #[case(color("ffffffff"), "<color>ffffffff</color>")]
    #[case(coordinates("0.1,0.2,0.3 1.1,1.2,1.3"), "<coordinates>0.1,0.2,0.3 1.1,1.2,1.3</coordinates>")]
    #[case(data("name", none()), r#"<Data name="name"></Data>"#)]
    #[case(description("desc"), "<description>desc</description>")]
    #[case(display_mode(DISPLAY_MODE_HIDE), "<displayMode>hide</displayMode>")]
    #[case(display_name("name"), "<displayName>name</displayName>")]
    #[case(document(none()), "<Document></Document>")]
    #[case(extended_data(none()), "<ExtendedData></ExtendedData>")]
    #[case(folder(none()), "<Folder></Folder>")]
    #[case(gx_option("sunlight", true), r#"<gx:option name="sunlight" enabled="1"></gx:option>"#)]
    #[case(gx_time_stamp("2020-01-01T00:00:00Z"), "<gx:TimeStamp><when>2020-01-01T00:00:00Z</when></gx:TimeStamp>")]
    #[case(gx_viewer_options(none()), "<gx:ViewerOptions></gx:ViewerOptions>")]
    #[case(heading(1.234), "<heading>1.234</heading>")]
    #[case(label_style(none()), "<LabelStyle></LabelStyle>")]
    #[case(latitude(1.234), "<latitude>1.234</latitude>")]
    #[case(line_string(none()), "<LineString></LineString>")]
    #[case(line_style(none()), "<LineStyle></LineStyle>")]
    #[case(longitude(1.234), "<longitude>1.234</longitude>")]
    #[case(multi_geometry(none()), "<MultiGeometry></MultiGeometry>")]
    #[case(name("value"), "<name>value</name>")]
    #[case(outline(true), "<outline>1</outline>")]
    #[case(placemark(none()), "<Placemark></Placemark>")]
    #[case(poly_style(none()), "<PolyStyle></PolyStyle>")]
    #[case(roll(1.234), "<roll>1.234</roll>")]
    #[case(scale(1.0), "<scale>1</scale>")]
    #[case(schema("id", "name", none()), r#"<Schema name="name" id="id"></Schema>"#)]
    #[case(schema_data("#schema", none()), r##"<SchemaData schemaUrl="#schema"></SchemaData>"##)]
    #[case(simple_data("name", "value"), r#"<SimpleData name="name">value</SimpleData>"#)]
    #[case(simple_field(SF_TYPE_DOUBLE, "name", none()), r#"<SimpleField type="double" name="name"></SimpleField>"#)]
    #[case(snippet("value"), "<Snippet>value</Snippet>")]
    #[case(style(none()), "<Style></Style>")]
    #[case(style_url("#value"), "<styleUrl>#value</styleUrl>")]
    #[case(tessellate(false), "<tessellate>0</tessellate>")]
    #[case(text("value"), "<text>value</text>")]
    #[case(tilt(1.234), "<tilt>1.234</tilt>")]
    #[case(width(3.5), "<width>3.5</width>")]
    fn test_element_rendering(#[case] element: Element, #[case] expected: &str) {
        assert_eq!(element.to_xml_string().unwrap(), expected);
    }

    #[test]
    fn test_leading_attributes_can_be_overridden() {
        let element = simple_field(SF_TYPE_STRING, "a", [attr("name", "b")]);
        assert_eq!(
            element.to_xml_string().unwrap(),
            r#"<SimpleField type="string" name="b"></SimpleField>"#
        );
    }

    #[test]
    fn test_scalar_helpers_with_items() {
        let snippet = string_element(ELEM_SNIPPET, "short", [attr_max_lines(1)]);
        assert_eq!(
            snippet.to_xml_string().unwrap(),
            r#"<Snippet maxLines="1">short</Snippet>"#
        );

        assert_eq!(int_element("count", 42, none()).content(), "42");
        assert_eq!(float_element("x", -0.5, none()).content(), "-0.5");
        assert_eq!(bool_element("visibility", false, none()).content(), "0");
    }

    #[test]
    fn test_string_element_with_child_keeps_children() {
        let element = string_element("description", "ignored", items![name("x")]);
        assert_eq!(element.content(), "");
        assert_eq!(element.child_count(), 1);
    }

    #[test]
    fn test_nested_build() {
        let doc = document(items![
            name("doc"),
            folder(items![crate::kml::attr_id("f1"), placemark(items![name("pm"), style_url("#s")])]),
        ]);

        assert_eq!(
            doc.to_xml_string().unwrap(),
            r##"<Document><name>doc</name><Folder id="f1"><Placemark><name>pm</name><styleUrl>#s</styleUrl></Placemark></Folder></Document>"##
        );
    }
}

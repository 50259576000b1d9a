//! Parser for the `transform` property value.
//! CSS Transforms §7.1: The `transform` property

use crate::primitive::{Length, TransformPrimitive};
use core::f32::consts::{PI, TAU};
use cssparser::{ParseError, Parser, ParserInput, Token, match_ignore_ascii_case};
use glam::Vec3;
use log::debug;

/// Parse a `transform` value into its primitive list.
///
/// `none` yields an empty list. Lengths accept `px`, percentages and a bare `0`;
/// angles accept `deg`, `rad`, `grad`, `turn` and a bare `0`. Any malformed function
/// rejects the whole value.
pub fn parse_transform(value: &str) -> Option<Vec<TransformPrimitive>> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    match parse_primitive_list(&mut parser) {
        Ok(primitives) => Some(primitives),
        Err(error) => {
            debug!("invalid transform `{value}`: {:?}", error.kind);
            None
        }
    }
}

fn parse_primitive_list<'input>(
    input: &mut Parser<'input, '_>,
) -> Result<Vec<TransformPrimitive>, ParseError<'input, ()>> {
    if input
        .try_parse(|keyword| keyword.expect_ident_matching("none"))
        .is_ok()
    {
        input.expect_exhausted()?;
        return Ok(Vec::new());
    }

    let mut primitives = Vec::new();
    while !input.is_exhausted() {
        let name = input.expect_function()?.clone();
        let primitive = input.parse_nested_block(|args| parse_function(&name, args))?;
        primitives.push(primitive);
    }
    if primitives.is_empty() {
        return Err(input.new_custom_error(()));
    }
    Ok(primitives)
}

fn parse_function<'input>(
    name: &str,
    args: &mut Parser<'input, '_>,
) -> Result<TransformPrimitive, ParseError<'input, ()>> {
    match_ignore_ascii_case! { name,
        "matrix" => {
            let values = parse_number_list::<6>(args)?;
            Ok(TransformPrimitive::Matrix2D(values))
        },
        "matrix3d" => {
            let values = parse_number_list::<16>(args)?;
            Ok(TransformPrimitive::Matrix3D(values))
        },
        "translate" => {
            let x = parse_length(args)?;
            let y = args
                .try_parse(|rest| {
                    rest.expect_comma()?;
                    parse_length(rest)
                })
                .unwrap_or_default();
            Ok(TransformPrimitive::Translate2D(x, y))
        },
        "translatex" => Ok(TransformPrimitive::TranslateX(parse_length(args)?)),
        "translatey" => Ok(TransformPrimitive::TranslateY(parse_length(args)?)),
        "translatez" => Ok(TransformPrimitive::TranslateZ(parse_length(args)?)),
        "translate3d" => {
            let x = parse_length(args)?;
            args.expect_comma()?;
            let y = parse_length(args)?;
            args.expect_comma()?;
            let z = parse_length(args)?;
            Ok(TransformPrimitive::Translate3D(x, y, z))
        },
        "scale" => {
            let x = parse_number(args)?;
            let y = args
                .try_parse(|rest| {
                    rest.expect_comma()?;
                    parse_number(rest)
                })
                .unwrap_or(x);
            Ok(TransformPrimitive::Scale2D(x, y))
        },
        "scalex" => Ok(TransformPrimitive::ScaleX(parse_number(args)?)),
        "scaley" => Ok(TransformPrimitive::ScaleY(parse_number(args)?)),
        "scalez" => Ok(TransformPrimitive::ScaleZ(parse_number(args)?)),
        "scale3d" => {
            let [x, y, z] = parse_number_list::<3>(args)?;
            Ok(TransformPrimitive::Scale3D(x, y, z))
        },
        "rotate" => Ok(TransformPrimitive::Rotate2D(parse_angle(args)?)),
        "rotatex" => Ok(TransformPrimitive::RotateX(parse_angle(args)?)),
        "rotatey" => Ok(TransformPrimitive::RotateY(parse_angle(args)?)),
        "rotatez" => Ok(TransformPrimitive::RotateZ(parse_angle(args)?)),
        "rotate3d" => {
            let [x, y, z] = parse_number_list::<3>(args)?;
            args.expect_comma()?;
            let angle = parse_angle(args)?;
            Ok(TransformPrimitive::Rotate3D(Vec3::new(x, y, z), angle))
        },
        "skew" => {
            let x = parse_angle(args)?;
            let y = args
                .try_parse(|rest| {
                    rest.expect_comma()?;
                    parse_angle(rest)
                })
                .unwrap_or(0.0);
            Ok(TransformPrimitive::Skew2D(x, y))
        },
        "skewx" => Ok(TransformPrimitive::SkewX(parse_angle(args)?)),
        "skewy" => Ok(TransformPrimitive::SkewY(parse_angle(args)?)),
        "perspective" => {
            let location = args.current_source_location();
            match parse_length(args)? {
                Length::Px(distance) => Ok(TransformPrimitive::Perspective(distance)),
                Length::Percent(_) => Err(location.new_custom_error(())),
            }
        },
        _ => Err(args.new_custom_error(())),
    }
}

/// `COUNT` comma-separated numbers.
fn parse_number_list<'input, const COUNT: usize>(
    args: &mut Parser<'input, '_>,
) -> Result<[f32; COUNT], ParseError<'input, ()>> {
    let mut values = [0.0; COUNT];
    for (index, slot) in values.iter_mut().enumerate() {
        if index > 0 {
            args.expect_comma()?;
        }
        *slot = parse_number(args)?;
    }
    Ok(values)
}

fn parse_number<'input>(args: &mut Parser<'input, '_>) -> Result<f32, ParseError<'input, ()>> {
    Ok(args.expect_number()?)
}

fn parse_length<'input>(args: &mut Parser<'input, '_>) -> Result<Length, ParseError<'input, ()>> {
    let location = args.current_source_location();
    match *args.next()? {
        Token::Dimension {
            value, ref unit, ..
        } if unit.eq_ignore_ascii_case("px") => Ok(Length::Px(value)),
        Token::Percentage { unit_value, .. } => Ok(Length::Percent(unit_value * 100.0)),
        Token::Number { value, .. } if value == 0.0 => Ok(Length::Px(0.0)),
        _ => Err(location.new_custom_error(())),
    }
}

fn parse_angle<'input>(args: &mut Parser<'input, '_>) -> Result<f32, ParseError<'input, ()>> {
    let location = args.current_source_location();
    let radians = match *args.next()? {
        Token::Dimension {
            value, ref unit, ..
        } => match_ignore_ascii_case! { &**unit,
            "deg" => Some(value.to_radians()),
            "rad" => Some(value),
            "grad" => Some(value * PI / 200.0),
            "turn" => Some(value * TAU),
            _ => None,
        },
        Token::Number { value, .. } if value == 0.0 => Some(0.0),
        _ => None,
    };
    radians.ok_or_else(|| location.new_custom_error(()))
}

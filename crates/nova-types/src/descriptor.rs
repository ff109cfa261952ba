use crate::error::{DescriptorError, Result};
use crate::{PrimitiveType, Type};

/// A parsed method descriptor such as `(ILjava/lang/String;)[I`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub parameters: Vec<Type>,
    /// `Type::Primitive { primitive: Void, .. }` for `V`.
    pub return_type: Type,
}

impl MethodDescriptor {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Convert a field descriptor (`I`, `[[Ljava/lang/String;`) into an erased [`Type`].
pub fn parse_field_descriptor(desc: &str) -> Result<Type> {
    let (ty, rest) = parse_field_type(desc, desc)?;
    if !rest.is_empty() {
        return Err(DescriptorError::TrailingInput(desc.to_string()));
    }
    Ok(ty)
}

pub fn parse_method_descriptor(desc: &str) -> Result<MethodDescriptor> {
    let Some(mut rest) = desc.strip_prefix('(') else {
        return Err(DescriptorError::Invalid(desc.to_string()));
    };

    let mut parameters = Vec::new();
    loop {
        if let Some(after) = rest.strip_prefix(')') {
            rest = after;
            break;
        }
        if rest.is_empty() {
            return Err(DescriptorError::Invalid(desc.to_string()));
        }
        let (param, after) = parse_field_type(rest, desc)?;
        parameters.push(param);
        rest = after;
    }

    let return_type = match rest {
        "V" => Type::primitive(PrimitiveType::Void),
        "" => return Err(DescriptorError::Invalid(desc.to_string())),
        _ => {
            let (ty, after) = parse_field_type(rest, desc)?;
            if !after.is_empty() {
                return Err(DescriptorError::TrailingInput(desc.to_string()));
            }
            ty
        }
    };

    Ok(MethodDescriptor {
        parameters,
        return_type,
    })
}

fn parse_field_type<'a>(input: &'a str, whole: &str) -> Result<(Type, &'a str)> {
    let mut dimension = 0u32;
    let mut rest = input;
    while let Some(after) = rest.strip_prefix('[') {
        dimension += 1;
        rest = after;
    }

    let mut chars = rest.chars();
    let Some(first) = chars.next() else {
        return Err(DescriptorError::Invalid(whole.to_string()));
    };

    if first == 'L' {
        let Some(end) = rest.find(';') else {
            return Err(DescriptorError::Invalid(whole.to_string()));
        };
        let internal_name = &rest[1..end];
        if internal_name.is_empty() {
            return Err(DescriptorError::Invalid(whole.to_string()));
        }
        let ty = Type::object(internal_name).with_dimension(dimension);
        return Ok((ty, &rest[end + 1..]));
    }

    match PrimitiveType::from_descriptor(first) {
        Some(PrimitiveType::Void) => Err(DescriptorError::MisplacedVoid(whole.to_string())),
        Some(primitive) => Ok((
            Type::Primitive {
                primitive,
                dimension,
            },
            chars.as_str(),
        )),
        None => Err(DescriptorError::Invalid(whole.to_string())),
    }
}

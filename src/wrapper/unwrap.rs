//! Script argument unwrapping
//!
//! A real driver cannot serialize an element proxy, so script arguments
//! are handed over with every proxied element replaced by the element it
//! wraps, at any depth of nested lists and maps.

use crate::webdriver::ScriptValue;

pub(crate) fn unwrap_args(args: &[ScriptValue]) -> Vec<ScriptValue> {
    args.iter().map(unwrap_value).collect()
}

fn unwrap_value(value: &ScriptValue) -> ScriptValue {
    match value {
        ScriptValue::Element(element) => match element.as_wrapper() {
            Some(wrapper) => ScriptValue::Element(wrapper.wrapped_original()),
            None => ScriptValue::Element(element.clone()),
        },
        ScriptValue::List(items) => ScriptValue::List(unwrap_args(items)),
        ScriptValue::Map(entries) => ScriptValue::Map(
            entries
                .iter()
                .map(|(key, value)| (key.clone(), unwrap_value(value)))
                .collect(),
        ),
        other => other.clone(),
    }
}

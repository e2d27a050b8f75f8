use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use forms::{FieldError, FieldKind, FieldSpec, FieldValue};

pub fn label_for(name: &str) -> &'static str {
    match name {
        "name" => "Your Name",
        "phone" => "Phone Number",
        "category" => "Category of products you sell?",
        "terms" => "I've read the T&C & Privacy Policy",
        "email" => "Work Email",
        "website" => "Website",
        "budget" => "Monthly Ad Budget",
        "goals" => "What do you want to achieve?",
        "message" => "How can we help?",
        _ => "",
    }
}

fn placeholder_for(name: &str) -> &'static str {
    match name {
        "name" => "Jane Doe",
        "phone" => "Enter 10 Digit Phone Number",
        "email" => "jane@company.com",
        "website" => "https://yourstore.com",
        "goals" | "message" => "Tell us about your goals...",
        _ => "",
    }
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub spec: FieldSpec,
    pub value: FieldValue,
    #[prop_or_default]
    pub error: Option<FieldError>,
    pub on_change: Callback<(String, FieldValue)>,
}

#[function_component]
pub fn FormField(props: &FormFieldProps) -> Html {
    let FormFieldProps { spec, value, error, on_change } = props;
    let name = spec.name.clone();
    let text = value.as_text().unwrap_or_default().to_string();
    let label = label_for(&spec.name);

    let input = match spec.kind {
        FieldKind::Checkbox => {
            let onchange = {
                let on_change = on_change.clone();
                let name = name.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), FieldValue::Flag(input.checked())));
                })
            };
            return html! {
                <div class="form-field checkbox-field">
                    <label>
                        <input type="checkbox" name={name} checked={value.as_flag().unwrap_or(false)} {onchange} />
                        { label }
                    </label>
                    if let Some(error) = error {
                        <p class="field-error">{ error.to_string() }</p>
                    }
                </div>
            };
        }
        FieldKind::Select => {
            let onchange = {
                let on_change = on_change.clone();
                let name = name.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), FieldValue::Text(select.value())));
                })
            };
            html! {
                <select name={name} {onchange}>
                    <option value="" selected={text.is_empty()}>{ "Select" }</option>
                    { for spec.options.iter().map(|option| html! {
                        <option value={option.clone()} selected={*option == text}>{ option.clone() }</option>
                    }) }
                </select>
            }
        }
        FieldKind::Text if spec.multiline => {
            let oninput = {
                let on_change = on_change.clone();
                let name = name.clone();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), FieldValue::Text(area.value())));
                })
            };
            html! {
                <textarea name={name} rows="4" value={text} placeholder={placeholder_for(&spec.name)} {oninput} />
            }
        }
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Url => "url",
                FieldKind::Phone => "tel",
                _ => "text",
            };
            let oninput = {
                let on_change = on_change.clone();
                let name = name.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_change.emit((name.clone(), FieldValue::Text(input.value())));
                })
            };
            html! {
                <input type={input_type} name={name} value={text} placeholder={placeholder_for(&spec.name)} {oninput} />
            }
        }
    };

    html! {
        <div class={classes!("form-field", error.is_some().then(|| "has-error"))}>
            <label>
                { label }
                if spec.required {
                    <span class="required">{ " *" }</span>
                }
            </label>
            { input }
            if let Some(error) = error {
                <p class="field-error">{ error.to_string() }</p>
            }
        </div>
    }
}

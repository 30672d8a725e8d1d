use super::*;

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_pressed: MaybeSignal<bool>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || aria_pressed.get()
            title=move || title.get()
            style=move || style.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| forward(on_click, ev)
            on:dblclick=move |ev| forward(on_dblclick, ev)
            on:pointerdown=move |ev| forward(on_pointerdown, ev)
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Selectable color swatch card showing a preview gradient and a label.
pub fn SwatchButton(
    #[prop(into)] label: String,
    #[prop(into)] preview_style: String,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            class="ui-swatch-button"
            aria-label=aria_label
            aria-pressed=move || selected.get()
            data-ui-primitive="true"
            data-ui-kind="swatch-button"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| forward(on_click, ev)
        >
            <span class="ui-swatch-preview" style=preview_style aria-hidden="true"></span>
            <span class="ui-swatch-label">{label}</span>
        </button>
    }
}

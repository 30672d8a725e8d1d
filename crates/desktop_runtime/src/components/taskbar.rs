use super::*;
use crate::{
    content::{content_catalog, content_icon},
    model::ContentType,
    theme::{themed_style, ThemeRole},
};
use system_ui::{Button, ButtonVariant, IconName, Taskbar, TaskbarButton, TaskbarSection};

#[derive(Debug, Clone, PartialEq, Eq)]
struct TaskbarEntry {
    window_id: WindowId,
    title: String,
    icon: IconName,
    minimized: bool,
    topmost: bool,
}

/// One entry per open window in open order, minimized ones included so they can be restored.
fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    let topmost = state.topmost_visible().map(|w| w.id);
    state
        .windows
        .iter()
        .map(|w| TaskbarEntry {
            window_id: w.id,
            title: w.title.clone(),
            icon: content_icon(w.content_type),
            minimized: w.is_minimized,
            topmost: topmost == Some(w.id),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot {
    hour: u32,
    minute: u32,
}

impl TaskbarClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self { hour: 0, minute: 0 }
        }
    }

    fn label(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let launcher_open = create_rw_signal(false);
    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let entries = create_memo(move |_| state.with(taskbar_entries));
    let button_style = create_memo(move |_| {
        state.with(|s| themed_style(&s.theme.palette, ThemeRole::Button).to_css())
    });
    let open_content = move |content_type: ContentType| {
        launcher_open.set(false);
        runtime.dispatch_action(DesktopAction::Open {
            content_type,
            payload: serde_json::Value::Null,
        });
    };

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="launcher">
                <Button
                    variant=ButtonVariant::Primary
                    ui_slot="launcher-button"
                    aria_label="Applications"
                    aria_pressed=launcher_open
                    leading_icon=IconName::Sparkles
                    style=button_style
                    on_click=Callback::new(move |_| launcher_open.update(|open| *open = !*open))
                >
                    "Portfolio"
                </Button>
                <Show when=move || launcher_open.get() fallback=|| ()>
                    <div class="taskbar-launcher-menu" role="menu" data-ui-slot="launcher-menu">
                        {content_catalog()
                            .iter()
                            .map(|entry| {
                                let content_type = entry.id;
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        ui_slot="launcher-item"
                                        leading_icon=entry.icon_name()
                                        on_click=Callback::new(move |_| open_content(content_type))
                                    >
                                        {entry.title.clone()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows" aria_label="Open windows">
                <For
                    each=move || entries.get()
                    key=|entry| (entry.window_id.0, entry.minimized, entry.topmost, entry.title.clone())
                    let:entry
                >
                    {{
                        let window_id = entry.window_id;
                        let label = if entry.minimized {
                            format!("{} (minimized)", entry.title)
                        } else {
                            entry.title.clone()
                        };
                        view! {
                            <TaskbarButton
                                title=entry.title.clone()
                                aria_label=label
                                selected=entry.topmost
                                pressed=!entry.minimized
                                leading_icon=entry.icon
                                style=button_style
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarWindow {
                                        window_id,
                                    })
                                })
                            >
                                {entry.title.clone()}
                            </TaskbarButton>
                        }
                    }}
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="clock">
                <time data-ui-slot="taskbar-clock">{move || clock_now.get().label()}</time>
            </TaskbarSection>
        </Taskbar>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;
    use crate::{model::InteractionState, reducer::reduce_desktop};

    #[test]
    fn entries_mark_minimized_and_topmost_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        for content_type in [ContentType::AboutMe, ContentType::Terminal, ContentType::Skills] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::Open {
                    content_type,
                    payload: Value::Null,
                },
            )
            .expect("open");
        }
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::Minimize {
                window_id: WindowId(3),
            },
        )
        .expect("minimize");

        let entries = taskbar_entries(&state);
        assert_eq!(
            entries
                .iter()
                .map(|entry| (entry.window_id, entry.minimized, entry.topmost))
                .collect::<Vec<_>>(),
            vec![
                (WindowId(1), false, false),
                (WindowId(2), false, true),
                (WindowId(3), true, false),
            ]
        );
        assert_eq!(entries[1].icon, IconName::Terminal);
        assert_eq!(entries[1].title, "Terminal");
    }

    #[test]
    fn clock_label_is_zero_padded() {
        assert_eq!(TaskbarClockSnapshot { hour: 9, minute: 5 }.label(), "09:05");
        assert_eq!(TaskbarClockSnapshot { hour: 23, minute: 59 }.label(), "23:59");
    }
}

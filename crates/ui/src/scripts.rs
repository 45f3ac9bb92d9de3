/// Smooth-scroll to the element with `anchor` as its id.
///
/// Retries for a few frames so a scroll requested right after a route change
/// still finds the landing page once it has rendered.
pub(crate) fn scroll_to_section_script(anchor: &str) -> String {
    format!(
        r#"(function() {{
                const id = {anchor:?};
                let attempts = 0;
                const go = () => {{
                    const target = document.getElementById(id);
                    if (target) {{
                        target.scrollIntoView({{ behavior: "smooth", block: "start" }});
                        return;
                    }}
                    attempts += 1;
                    if (attempts < 30) {{
                        requestAnimationFrame(go);
                    }}
                }};
                go();
            }})();"#,
        anchor = anchor,
    )
}

pub(crate) const SPEECH_DETECT_SCRIPT: &str =
    r#"return ("speechSynthesis" in window) && ("SpeechSynthesisUtterance" in window);"#;

/// Speak one utterance and stream its lifecycle back over `dioxus.send`.
///
/// Any utterance still playing is cancelled first. The cancelled utterance
/// reports `interrupted`, which is forwarded as a normal end. Every message
/// carries the request id so the receiver can drop messages from superseded
/// utterances.
pub(crate) fn speak_script(request_json: &str) -> String {
    format!(
        r#"const request = {request_json};
            const id = request.id;
            const synth = window.speechSynthesis;
            if (!synth || typeof SpeechSynthesisUtterance === "undefined") {{
                dioxus.send({{ type: "failed", request: id, message: "speech synthesis unsupported" }});
                return;
            }}
            synth.cancel();
            const utterance = new SpeechSynthesisUtterance(request.text);
            utterance.lang = request.lang;
            utterance.rate = request.rate;
            utterance.pitch = request.pitch;
            utterance.onstart = () => dioxus.send({{ type: "started", request: id }});
            utterance.onend = () => dioxus.send({{ type: "ended", request: id }});
            utterance.onerror = (event) => {{
                const reason = event && event.error ? String(event.error) : "unknown";
                if (reason === "interrupted" || reason === "canceled") {{
                    dioxus.send({{ type: "ended", request: id }});
                }} else {{
                    dioxus.send({{ type: "failed", request: id, message: reason }});
                }}
            }};
            synth.speak(utterance);"#,
        request_json = request_json,
    )
}

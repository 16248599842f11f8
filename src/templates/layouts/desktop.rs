use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | " (crate::site::CLINIC_NAME) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
              header class="flex items-center justify-between px-6 py-3 shadow" {
                  a href="/home" class="text-xl font-bold" { (crate::site::CLINIC_NAME) }
                  nav {
                      ul {
                          li { a href="/home" { "Home" } }
                          li { a href="/hours" { "Hours" } }
                      }
                  }
              }
                (content)
              footer class="px-6 py-4 text-sm text-gray-500" {
                  (crate::site::CLINIC_ADDRESS) " · " (crate::site::CLINIC_PHONE)
              }
            }
        }
    }
}

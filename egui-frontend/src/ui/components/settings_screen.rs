//! # Settings Screen ("Meu espaco")
//!
//! Profile summary, the Instagram integration switch and the per-category
//! preferences: which categories appear on the home screen and which ones
//! send alerts, with select-all actions.

use eframe::egui;
use shared::CategoryKey;

use crate::backend::domain::AppSnapshot;
use crate::ui::app_state::EconomiaApp;
use crate::ui::components::header::{render_screen_header, section_title};
use crate::ui::components::theme::{colors, primary_button, secondary_button};

/// Preference change requested this frame
enum PreferenceChange {
    ToggleData(CategoryKey),
    ToggleAlert(CategoryKey),
    AllData(bool),
    AllAlerts(bool),
}

fn profile_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(colors::TEXT_SECONDARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let value = if value.trim().is_empty() { "-" } else { value };
            ui.label(egui::RichText::new(value).color(colors::TEXT_PRIMARY));
        });
    });
}

impl EconomiaApp {
    pub fn render_settings_screen(&mut self, ui: &mut egui::Ui, snapshot: &AppSnapshot) {
        let greeting = format!("Ola {},", snapshot.user_email().unwrap_or_default());
        render_screen_header(ui, "Meu espaco", &greeting, None);

        section_title(ui, "Cadastrais");
        let profile = snapshot.active_profile();
        egui::Frame::none()
            .fill(colors::SURFACE)
            .rounding(egui::Rounding::same(12.0))
            .inner_margin(egui::Margin::same(14.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                profile_row(ui, "Nome", &profile.first_name);
                profile_row(ui, "Sobrenome", &profile.last_name);
                profile_row(ui, "Data de nascimento", &profile.birth_date);
                profile_row(ui, "Telefone (com DDD)", &profile.phone);
                profile_row(ui, "E-mail", &profile.email);
                profile_row(ui, "Origem do cadastro", profile.provider.display_name());
            });

        self.render_integrations(ui);

        section_title(ui, "Preferencias");
        let mut change = None;

        egui::Grid::new("category_preferences")
            .num_columns(3)
            .spacing(egui::vec2(24.0, 8.0))
            .show(ui, |ui| {
                ui.label(egui::RichText::new("Categoria").strong());
                ui.label(egui::RichText::new("Home").strong());
                ui.label(egui::RichText::new("Alertas").strong());
                ui.end_row();

                for key in CategoryKey::ALL {
                    ui.label(key.label());
                    let mut data = snapshot.data_preference(key);
                    if ui.checkbox(&mut data, "").changed() {
                        change = Some(PreferenceChange::ToggleData(key));
                    }
                    let mut alert = snapshot.alert_preference(key);
                    if ui.checkbox(&mut alert, "").changed() {
                        change = Some(PreferenceChange::ToggleAlert(key));
                    }
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            let all_data = snapshot.all_data_enabled();
            let data_label = if all_data { "Desmarcar todas" } else { "Marcar todas" };
            if ui.add(secondary_button(data_label)).clicked() {
                change = Some(PreferenceChange::AllData(!all_data));
            }

            let all_alerts = snapshot.all_alerts_enabled();
            let alert_label = if all_alerts { "Desativar alertas" } else { "Ativar alertas" };
            if ui.add(secondary_button(alert_label)).clicked() {
                change = Some(PreferenceChange::AllAlerts(!all_alerts));
            }
        });

        match change {
            Some(PreferenceChange::ToggleData(key)) => {
                self.store.toggle_data_preference(key);
            }
            Some(PreferenceChange::ToggleAlert(key)) => {
                self.store.toggle_alert_preference(key);
            }
            Some(PreferenceChange::AllData(enabled)) => {
                self.store.set_all_data_preferences(enabled);
            }
            Some(PreferenceChange::AllAlerts(enabled)) => {
                self.store.set_all_alert_preferences(enabled);
            }
            None => {}
        }
    }

    fn render_integrations(&mut self, ui: &mut egui::Ui) {
        section_title(ui, "Integracoes");
        let mut enabled = self.instagram.enabled;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Instagram").color(colors::TEXT_PRIMARY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let switch = ui.add_enabled(!self.instagram.is_loading(), egui::Checkbox::without_text(&mut enabled));
                if switch.changed() {
                    self.instagram.toggle(enabled);
                }
            });
        });
        if let Some(notice) = &self.instagram.notice {
            ui.label(egui::RichText::new(notice).size(13.0).color(colors::PRIMARY));
        }
    }

    /// Credential form opened by switching the Instagram integration on
    pub fn render_instagram_form_window(&mut self, ctx: &egui::Context) {
        if !self.instagram.form_open {
            return;
        }

        let loading = self.instagram.is_loading();
        let mut open = true;
        let mut connect = false;
        let mut cancel = false;

        egui::Window::new("Conectar Instagram")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Use a conta de testes do Instagram para validar a integracao.")
                        .color(colors::TEXT_SECONDARY),
                );
                ui.add_space(8.0);
                ui.add_enabled(
                    !loading,
                    egui::TextEdit::singleline(&mut self.instagram.username).hint_text("Usuario"),
                );
                ui.add_enabled(
                    !loading,
                    egui::TextEdit::singleline(&mut self.instagram.password)
                        .hint_text("Senha")
                        .password(true),
                );

                if let Some(error) = &self.instagram.error {
                    ui.label(egui::RichText::new(error).size(14.0).color(colors::TEXT_ERROR));
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if loading {
                        ui.add(egui::Spinner::new());
                    } else if ui.add(primary_button("Conectar")).clicked() {
                        connect = true;
                    }
                    if ui.add(secondary_button("Cancelar")).clicked() {
                        cancel = true;
                    }
                });
            });

        if !open || cancel {
            self.instagram.close_form();
        } else if connect {
            self.instagram.connect(self.backend.instagram_authenticator.clone());
        }
    }
}

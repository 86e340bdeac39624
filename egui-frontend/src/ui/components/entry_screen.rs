//! # Entry Screen
//!
//! First screen of the app: the animated logo, then either the login form or
//! the registration wizard.
//!
//! ## Views:
//! - Login - e-mail and password, link to create an account
//! - Wizard choice - connect LinkedIn/Instagram or fill in manually
//! - Wizard form - one field per step with back/advance actions

use eframe::egui;
use log::debug;
use shared::{RegistrationOrigin, WizardMode};

use crate::backend::domain::{AdvanceOutcome, WizardSnapshot};
use crate::ui::app_state::EconomiaApp;
use crate::ui::components::theme::{colors, primary_button, secondary_button};

const LOGO_TOP_SPACE: f32 = 220.0;
const FORM_WIDTH: f32 = 360.0;

fn error_label(ui: &mut egui::Ui, message: &str) {
    ui.label(egui::RichText::new(message).color(colors::TEXT_ERROR).size(14.0));
}

fn link(ui: &mut egui::Ui, text: &str, color: egui::Color32) -> bool {
    ui.add(egui::Button::new(egui::RichText::new(text).color(color).underline()).frame(false))
        .clicked()
}

impl EconomiaApp {
    pub fn render_entry_screen(&mut self, ui: &mut egui::Ui) {
        let animation = self.entry.animation.clone();

        ui.vertical_centered(|ui| {
            ui.add_space((LOGO_TOP_SPACE + animation.logo_offset()).max(0.0));
            ui.label(
                egui::RichText::new("Economia")
                    .size(40.0)
                    .strong()
                    .color(colors::NIGHT_BLUE.gamma_multiply(animation.logo_opacity())),
            );

            let content_opacity = animation.content_opacity();
            if content_opacity <= 0.0 {
                return;
            }
            ui.set_opacity(content_opacity);
            ui.add_space(24.0);
            ui.set_max_width(FORM_WIDTH);

            if !self.entry.creating_account {
                self.render_login_form(ui);
            } else {
                let wizard = &self.entry.wizard;
                let key = (wizard.current_step(), wizard.mode() == WizardMode::Form);
                self.entry.step_transition.observe(key);
                match self.entry.wizard.mode() {
                    WizardMode::Choice => self.render_registration_choice(ui),
                    WizardMode::Form => self.render_registration_form(ui),
                }
            }
        });
    }

    fn render_login_form(&mut self, ui: &mut egui::Ui) {
        ui.label(
            egui::RichText::new("Economia descomplicada nas suas maos")
                .size(20.0)
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(16.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.entry.login_email)
                .hint_text("E-mail")
                .desired_width(FORM_WIDTH),
        );
        let password = ui.add(
            egui::TextEdit::singleline(&mut self.entry.login_password)
                .hint_text("Senha")
                .password(true)
                .desired_width(FORM_WIDTH),
        );

        if let Some(message) = &self.entry.login_error {
            error_label(ui, message);
        }

        let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.add(primary_button("Entrar")).clicked() || submitted {
            if self.entry.submit_login(&mut self.store) {
                ui.ctx().request_repaint();
            }
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Primeira vez por aqui?").color(colors::TEXT_SECONDARY));
            if link(ui, "Criar meu acesso", colors::PRIMARY) {
                self.entry.toggle_create_account();
            }
        });
    }

    fn render_registration_choice(&mut self, ui: &mut egui::Ui) {
        let wizard = self.entry.wizard.snapshot();
        let pending = self.entry.wizard.pending_origin();

        ui.label(egui::RichText::new("Como deseja criar sua conta?").size(20.0).strong());
        ui.label(
            egui::RichText::new(
                "Conecte seu LinkedIn ou Instagram para preencher automaticamente os primeiros dados.",
            )
            .color(colors::TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        if let Some(message) = &wizard.error_message {
            error_label(ui, message);
        }

        for origin in [RegistrationOrigin::LinkedIn, RegistrationOrigin::Instagram] {
            if pending == Some(origin) {
                ui.add_sized([FORM_WIDTH, 40.0], egui::Spinner::new());
                continue;
            }
            let label = format!("Conectar com {}", origin.display_name());
            if ui.add_enabled(!wizard.is_busy, secondary_button(&label)).clicked() {
                self.entry
                    .choose_origin(origin, self.backend.profile_provider.clone());
            }
        }

        ui.add_space(8.0);
        if ui.add_enabled(!wizard.is_busy, primary_button("Prefiro preencher")).clicked() {
            self.entry
                .choose_origin(RegistrationOrigin::Manual, self.backend.profile_provider.clone());
        }
        if ui.add_enabled(!wizard.is_busy, secondary_button("Voltar para o login")).clicked() {
            self.entry.toggle_create_account();
        }
    }

    fn render_registration_form(&mut self, ui: &mut egui::Ui) {
        let wizard = self.entry.wizard.snapshot();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&wizard.progress_label).color(colors::TEXT_SECONDARY));
            if wizard.can_change_method {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if link(ui, "Trocar metodo", colors::PRIMARY) {
                        if let Err(e) = self.entry.wizard.change_method() {
                            debug!("Wizard did not change method: {:?}", e);
                        }
                    }
                });
            }
        });

        let transition = self.entry.step_transition.clone();
        ui.horizontal(|ui| {
            ui.add_space(transition.offset_x());
            ui.vertical(|ui| {
                ui.set_opacity(transition.opacity());
                self.render_active_step(ui, &wizard);
            });
        });

        ui.add_space(12.0);
        if link(ui, "Escolher outro metodo", colors::PRIMARY) {
            // manual drafts have nothing imported to keep
            if wizard.can_change_method {
                if let Err(e) = self.entry.wizard.change_method() {
                    debug!("Wizard did not change method: {:?}", e);
                }
            } else {
                self.entry.wizard.reset();
            }
        }
        if link(ui, "Voltar para o login", colors::TEXT_SECONDARY) {
            self.entry.toggle_create_account();
        }
    }

    fn render_active_step(&mut self, ui: &mut egui::Ui, wizard: &WizardSnapshot) {
        if let Some(banner) = wizard.banner {
            egui::Frame::none()
                .fill(colors::SURFACE)
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(banner).size(13.0).color(colors::DEEP_BLUE));
                });
            ui.add_space(8.0);
        }

        let step = wizard.step;
        ui.label(egui::RichText::new(step.title).size(20.0).strong().color(colors::TEXT_PRIMARY));
        ui.label(egui::RichText::new(step.description).color(colors::TEXT_SECONDARY));
        ui.add_space(8.0);

        let mut value = wizard.record.get(step.field).to_string();
        let input = ui.add(
            egui::TextEdit::singleline(&mut value)
                .hint_text(step.placeholder)
                .password(step.masked)
                .desired_width(FORM_WIDTH),
        );
        if input.changed() {
            self.entry.wizard.update_field(step.field, &value);
        }

        if let Some(message) = &wizard.error_message {
            error_label(ui, message);
        }

        let submitted = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let mut advance = submitted;
        ui.horizontal(|ui| {
            if wizard.current_step > 0 && ui.add(secondary_button("Voltar")).clicked() {
                if let Err(e) = self.entry.wizard.back() {
                    debug!("Wizard did not go back: {:?}", e);
                }
            }
            let label = if wizard.is_last_step { "Concluir" } else { "Avancar" };
            if ui.add(primary_button(label)).clicked() {
                advance = true;
            }
        });

        if advance {
            match self.entry.wizard.advance(&mut self.store) {
                Ok(AdvanceOutcome::Completed(record)) => {
                    self.entry.finish_registration(record);
                    ui.ctx().request_repaint();
                }
                Ok(AdvanceOutcome::Moved { step }) => debug!("Wizard moved to step {}", step + 1),
                Err(e) => debug!("Wizard did not advance: {:?}", e),
            }
        }
    }
}

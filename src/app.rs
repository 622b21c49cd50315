//! The eframe application drawing the profile page.

use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Datelike, Local};
use eframe::egui::{self, Color32, RichText, Stroke};

use crate::color::HexColor;
use crate::image_ops::load_color_image;
use crate::page::{Document, Page, Property, Region};
use crate::profile::age::AgeOutcome;
use crate::profile::customize::{pick_background, pick_text_color};
use crate::profile::greeting::{ClockText, footer_line, today_line};
use crate::profile::picture::ZOOM_CLASS;
use crate::profile::validation::{
    CharCounter, CounterLevel, Feedback, Field, keystroke_feedback, text_length,
};
use crate::render::{self, ERROR_RED, MUTED_GRAY, SUCCESS_GREEN, WARNING_ORANGE};
use crate::settings::AppSettings;
use crate::slideshow::{AutoAdvance, Slideshow};
use crate::state::ProfileState;
use crate::theme::ThemeSynchronizer;

/// Page sections reachable from the navbar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Section {
    About,
    Gallery,
    Skills,
    Contact,
}

impl Section {
    const ALL: [Section; 4] = [Section::About, Section::Gallery, Section::Skills, Section::Contact];

    fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Gallery => "Gallery",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

pub struct ProfileApp {
    page: Document,
    slideshow: Slideshow,
    profile: ProfileState,
    /// Decoded image textures; `None` marks an image that failed to load.
    textures: HashMap<String, Option<egui::TextureHandle>>,
    scroll_target: Option<Section>,
}

impl ProfileApp {
    pub fn new(settings: &AppSettings) -> Result<Self> {
        let mut profile = ProfileState::from_settings(settings);
        let theme = ThemeSynchronizer::new(
            settings.schemes(),
            settings.theme_settings(),
            profile.dark_mode.clone(),
        );
        let mut slideshow = Slideshow::new(settings.slide_sources(), theme, settings.timing())?;

        let mut page = Document::profile();
        profile.dark_mode.sync_page(&mut page);
        profile.font_size.write(&mut page);
        profile.picture.init(&mut page);
        slideshow.init(&mut page);
        log::info!("profile page ready with {} slides", slideshow.len());

        Ok(Self {
            page,
            slideshow,
            profile,
            textures: HashMap::new(),
            scroll_target: None,
        })
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.slideshow.poll(&mut self.page, now);
        self.profile.picture.poll(&mut self.page, now);
        self.page.set_text(Region::TodayDate, &today_line(&Local::now()));
        render::apply_page_style(ctx, &self.page, self.profile.dark_mode.is_active());

        self.navbar(ctx);

        let dark = self.profile.dark_mode.is_active();
        let mut frame = egui::Frame::central_panel(&ctx.style());
        if !dark {
            if let Some(fill) = render::region_fill(&self.page, Region::Wrapper) {
                frame = frame.fill(fill);
            }
        }
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            egui::ScrollArea::vertical().id_source("page").show(ui, |ui| {
                self.about_section(ui);
                ui.separator();
                self.gallery_section(ui);
                ui.separator();
                self.quote_section(ui);
                ui.separator();
                self.skills_section(ui);
                ui.separator();
                self.customize_section(ui);
                ui.separator();
                self.age_section(ui);
                ui.separator();
                self.contact_section(ui);
                ui.separator();
                ui.label(RichText::new(footer_line(&Local::now())).strong());
            });
        });

        let busy = self.slideshow.auto_advance() == AutoAdvance::Running
            || self.slideshow.is_fading()
            || self.profile.picture.is_fading();
        ctx.request_repaint_after(if busy {
            Duration::from_millis(50)
        } else {
            Duration::from_secs(1)
        });
    }

    fn navbar(&mut self, ctx: &egui::Context) {
        let dark = self.profile.dark_mode.is_active();
        let mut frame = egui::Frame::none().inner_margin(egui::Margin::symmetric(12.0, 8.0));
        if !dark {
            if let Some(fill) = render::region_fill(&self.page, Region::Navbar) {
                frame = frame.fill(fill);
            }
        }
        let link_color = self
            .page
            .color(Region::NavLinks, Property::Color)
            .filter(|_| !dark)
            .map(render::color32);

        egui::TopBottomPanel::top("navbar").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(&self.profile.name).strong());
                ui.add_space(16.0);
                for section in Section::ALL {
                    let mut text = RichText::new(section.label());
                    if let Some(color) = link_color {
                        text = text.color(color);
                    }
                    if ui.link(text).clicked() {
                        self.scroll_target = Some(section);
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("A+").clicked() {
                        self.profile.font_size.adjust(&mut self.page, true);
                    }
                    if ui.button("A-").clicked() {
                        self.profile.font_size.adjust(&mut self.page, false);
                    }
                    let label = self.page.text(Region::ThemeButton).unwrap_or_default().to_string();
                    if ui.button(label).clicked() {
                        self.profile.dark_mode.toggle(&mut self.page);
                        self.slideshow.refresh_theme(&mut self.page);
                    }
                });
            });
        });
    }

    fn section_heading(&mut self, ui: &mut egui::Ui, section: Section, title: &str) {
        let response = ui.heading(title);
        if self.scroll_target == Some(section) {
            response.scroll_to_me(Some(egui::Align::TOP));
            self.scroll_target = None;
        }
    }

    fn about_section(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, Section::About, "About");
        self.profile_picture(ui);
        let clock = ClockText::at(&Local::now());
        ui.label(RichText::new(&clock.greeting).strong());
        ui.label(clock.date.as_str());
        ui.label(format!("{}  {}", clock.time, clock.offset));
        ui.label(self.page.text(Region::TodayDate).unwrap_or_default());

        ui.horizontal(|ui| match self.profile.job_title_draft.as_mut() {
            Some(draft) => {
                ui.text_edit_singleline(draft);
                if ui.button("Save").clicked() {
                    self.profile.commit_job_title();
                } else if ui.button("Cancel").clicked() {
                    self.profile.job_title_draft = None;
                }
            }
            None => {
                ui.label(RichText::new(&self.profile.job_title).italics());
                let edit = render::accent_button(&self.page, Region::Buttons, "Edit Job Title");
                if ui.add(edit).clicked() {
                    self.profile.job_title_draft = Some(self.profile.job_title.clone());
                }
            }
        });
    }

    fn profile_picture(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        let opacity = ctx.animate_value_with_time(
            egui::Id::new("profile_opacity"),
            render::opacity(&self.page, Region::ProfileImage),
            0.3,
        );
        let zoomed = self.page.has_class(Region::ProfileImage, ZOOM_CLASS);
        let side = ctx.animate_value_with_time(
            egui::Id::new("profile_zoom"),
            if zoomed { 240.0 } else { 160.0 },
            0.3,
        );

        if let Some(source) = self.page.source(Region::ProfileImage).map(str::to_string) {
            let response = match self.texture(&ctx, &source) {
                Some(texture) => ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                        .fit_to_exact_size(egui::vec2(side, side))
                        .tint(Color32::from_white_alpha((opacity * 255.0).round() as u8))
                        .sense(egui::Sense::click()),
                ),
                None => ui.add(
                    egui::Label::new(RichText::new(format!("[{source}]")).color(MUTED_GRAY))
                        .sense(egui::Sense::click()),
                ),
            };
            if response.on_hover_text("Click to zoom in/out").clicked() {
                self.profile.picture.toggle_zoom(&mut self.page);
            }
        }

        let change = render::accent_button(&self.page, Region::Buttons, "Change Profile Picture");
        if ui.add(change).clicked() {
            self.profile.picture.cycle(&mut self.page);
        }
    }

    fn gallery_section(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, Section::Gallery, "Gallery");

        let target = render::opacity(&self.page, Region::SlideImage);
        let opacity = ui
            .ctx()
            .animate_value_with_time(egui::Id::new("slide_opacity"), target, 0.3);
        let source = self.slideshow.current_slide().to_string();
        match self.texture(ui.ctx(), &source) {
            Some(texture) => {
                let tint = Color32::from_white_alpha((opacity * 255.0).round() as u8);
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(&texture))
                        .max_width(480.0)
                        .tint(tint),
                );
            }
            None => {
                ui.label(RichText::new(format!("[{source}]")).color(MUTED_GRAY));
            }
        }

        ui.horizontal(|ui| {
            if ui.button("<").clicked() {
                self.slideshow.prev(&mut self.page);
            }
            ui.label(self.page.text(Region::SlideCounter).unwrap_or_default());
            if ui.button(">").clicked() {
                self.slideshow.next(&mut self.page);
            }
            let label = self
                .page
                .text(Region::AutoAdvanceButton)
                .unwrap_or_default()
                .to_string();
            let toggle = render::accent_button(&self.page, Region::PrimaryButtons, &label);
            if ui.add(toggle).clicked() {
                self.slideshow.toggle_auto_advance(&mut self.page);
            }
        });
    }

    fn texture(&mut self, ctx: &egui::Context, source: &str) -> Option<egui::TextureHandle> {
        self.textures
            .entry(source.to_string())
            .or_insert_with(|| match load_color_image(Path::new(source)) {
                Ok(image) => Some(ctx.load_texture(source, image, egui::TextureOptions::LINEAR)),
                Err(err) => {
                    log::warn!("{err:#}");
                    None
                }
            })
            .clone()
    }

    fn quote_section(&mut self, ui: &mut egui::Ui) {
        let dark = self.profile.dark_mode.is_active();
        let border = render::border_left(&self.page, Region::QuoteSection)
            .filter(|_| !dark)
            .unwrap_or(MUTED_GRAY);
        let response = egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(14.0, 6.0))
            .show(ui, |ui| {
                ui.label(RichText::new(self.profile.quotes.current()).italics());
                let button = render::accent_button(&self.page, Region::PrimaryButtons, "New Quote");
                if ui.add(button).clicked() {
                    self.profile.quotes.next_quote();
                }
            })
            .response;
        let rect = response.rect;
        ui.painter()
            .line_segment([rect.left_top(), rect.left_bottom()], Stroke::new(4.0, border));
    }

    fn skills_section(&mut self, ui: &mut egui::Ui) {
        let heading = self.profile.skills.heading();
        self.section_heading(ui, Section::Skills, &heading);
        ui.horizontal(|ui| {
            let mut query = self.profile.skills.query().to_string();
            ui.label("Search:");
            if ui.text_edit_singleline(&mut query).changed() {
                self.profile.skills.set_query(&query);
            }
            let label = self.profile.skills.toggle_label();
            if ui.add(render::accent_button(&self.page, Region::Buttons, label)).clicked() {
                self.profile.skills.toggle_hidden();
            }
        });
        if !self.profile.skills.hidden {
            for skill in self.profile.skills.visible() {
                ui.label(format!("• {skill}"));
            }
        }
    }

    fn customize_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Customize");
        ui.horizontal(|ui| {
            ui.label("Background:");
            let mut rgb = to_rgb(self.profile.background_pick);
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.profile.background_pick = HexColor::new(rgb[0], rgb[1], rgb[2]);
                pick_background(&mut self.page, self.profile.background_pick);
            }
            ui.label("Text:");
            let mut rgb = to_rgb(self.profile.text_pick);
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.profile.text_pick = HexColor::new(rgb[0], rgb[1], rgb[2]);
                pick_text_color(&mut self.page, self.profile.text_pick);
            }
        });
    }

    fn age_section(&mut self, ui: &mut egui::Ui) {
        ui.heading("Age Calculator");
        ui.horizontal(|ui| {
            ui.label("Birth year:");
            if ui.text_edit_singleline(&mut self.profile.birth_year).changed() {
                self.profile.update_age(Local::now().year());
            }
        });
        let color = match self.profile.age {
            AgeOutcome::Age(_) => SUCCESS_GREEN,
            AgeOutcome::Invalid { .. } => ERROR_RED,
            AgeOutcome::Empty => MUTED_GRAY,
        };
        ui.label(RichText::new(self.profile.age.message()).color(color));
    }

    fn contact_section(&mut self, ui: &mut egui::Ui) {
        self.section_heading(ui, Section::Contact, "Contact");
        if let Some(feedback) = &self.profile.feedback {
            feedback_banner(ui, feedback);
        }

        let max = self.profile.message_max_length;
        let mut touched = None;
        egui::Grid::new("contact_form").num_columns(2).show(ui, |ui| {
            ui.label("Name");
            if ui.text_edit_singleline(&mut self.profile.form.name).changed() {
                touched = Some(Field::Name);
            }
            ui.end_row();
            ui.label("Email");
            if ui.text_edit_singleline(&mut self.profile.form.email).changed() {
                touched = Some(Field::Email);
            }
            ui.end_row();
            ui.label("Message");
            let message = egui::TextEdit::multiline(&mut self.profile.form.message).char_limit(max);
            if ui.add(message).changed() {
                touched = Some(Field::Message);
            }
            ui.end_row();
        });
        if let Some(field) = touched {
            let value = match field {
                Field::Name => &self.profile.form.name,
                Field::Email => &self.profile.form.email,
                Field::Message => &self.profile.form.message,
            };
            if let Some(feedback) = keystroke_feedback(field, value) {
                self.profile.feedback = Some(feedback);
            }
        }

        let counter = CharCounter::new(text_length(&self.profile.form.message), max);
        let counter_color = match counter.level {
            CounterLevel::Critical => ERROR_RED,
            CounterLevel::Warning => WARNING_ORANGE,
            CounterLevel::Normal => MUTED_GRAY,
        };
        ui.label(RichText::new(counter.remaining.to_string()).color(counter_color));

        let submit = render::accent_button(&self.page, Region::PrimaryButtons, "Send");
        if ui.add(submit).clicked() {
            self.profile.feedback = Some(match self.profile.form.submit() {
                Ok(done) => done,
                Err(err) => {
                    log::debug!("contact form rejected: {err}");
                    Feedback::error(err.to_string())
                }
            });
        }
    }
}

fn feedback_banner(ui: &mut egui::Ui, feedback: &Feedback) {
    let (fill, text) = if feedback.is_error {
        (Color32::from_rgb(0xff, 0xeb, 0xee), ERROR_RED)
    } else {
        (Color32::from_rgb(0xe8, 0xf5, 0xe9), SUCCESS_GREEN)
    };
    egui::Frame::none()
        .fill(fill)
        .stroke(Stroke::new(1.0, text))
        .rounding(4.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.label(RichText::new(&feedback.text).color(text));
        });
}

fn to_rgb(color: HexColor) -> [u8; 3] {
    [color.r, color.g, color.b]
}

impl eframe::App for ProfileApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

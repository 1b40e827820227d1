use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use design_tokens::{Color, Group, Mode, Primitives, RGBColor, ShadeScale};
use design_tokens::components::{Badge, Button, ButtonState, ButtonType, Size};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8], labels: &[String],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for l in labels {
        writeln!(fh, "  <td style=\"font-size: 9px; text-align: center\">\
                      {l}</td>")?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn scale(fh: &mut impl Write, s: &ShadeScale<Color>, comment: &str)
         -> Result<(), Err> {
    let s = s.convert::<RGB8>();
    let labels: Vec<_> = s.iter().map(|(k, _)| k.to_string()).collect();
    table_of_colors(fh, &s.colors(), &labels, 48, comment)
}

fn roles(fh: &mut impl Write, p: &Primitives, mode: Mode) -> Result<(), Err> {
    let (labels, colors): (Vec<_>, Vec<_>) = p.theme(mode).roles()
        .map(|(role, c)| (role.to_string(), RGB8::from_rgba(c.to_rgba())))
        .unzip();
    for (labels, colors) in labels.chunks(10).zip(colors.chunks(10)) {
        table_of_colors(fh, colors, labels, 90, &mode.to_string())?;
    }
    Ok(())
}

fn buttons(fh: &mut impl Write, p: &Primitives, mode: Mode) -> Result<(), Err> {
    let theme = p.theme(mode);
    writeln!(fh, "<div style=\"background: {}; padding: 12px\">",
             theme.role("bg/primary").unwrap_or_default().to_hex())?;
    for typ in ButtonType::ALL {
        for state in ButtonState::ALL {
            let b = Button { typ: *typ, state: *state, size: Size::Md };
            let m = b.metrics();
            let s = b.style(p.seeds().primary).resolve(&theme);
            let bg = s.background.map_or("transparent".to_string(), |c| c.to_hex());
            let border = s.border.map_or("none".to_string(),
                                         |c| format!("1px solid {}", c.to_hex()));
            writeln!(fh, "  <span title=\"{}\" style=\"display: inline-block; \
                          height: {}px; line-height: {}px; padding: 0 {}px; \
                          border-radius: {}px; background: {bg}; border: {border}; \
                          color: {}; font-size: {}px; margin: 4px\">{state}</span>",
                     b.name(), m.height, m.height, m.padding_x, m.corner_radius,
                     s.text.to_hex(), m.font_size)?;
        }
        writeln!(fh, "  <br/>")?;
    }
    for b in Badge::variants().filter(|b| b.size == Size::Md) {
        let m = b.metrics();
        let s = b.style(p.seeds().primary).resolve(&theme);
        writeln!(fh, "  <span style=\"display: inline-block; height: {}px; \
                      line-height: {}px; padding: 0 {}px; border-radius: {}px; \
                      background: {}; color: {}; font-size: {}px; margin: 4px\"\
                      >{}</span>",
                 m.height, m.height, m.padding_x, m.corner_radius,
                 s.background.unwrap_or_default().to_hex(), s.text.to_hex(),
                 m.font_size, b.typ)?;
    }
    writeln!(fh, "</div><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut args = env::args().skip(1);
    let primary = args.next().unwrap_or_else(|| "#2196F3".to_string());
    let secondary = args.next().unwrap_or_else(|| "#9C27B0".to_string());
    let p = Primitives::from_hex(&primary, &secondary);

    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Design tokens: {primary} / {secondary}</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Primitives</h3>")?;
    for g in Group::ALL {
        scale(&mut fh, p.scale(g), g.name())?;
    }
    for mode in Mode::ALL {
        writeln!(fh, "<h3>Semantic roles ({mode})</h3>")?;
        roles(&mut fh, &p, mode)?;
        writeln!(fh, "<h3>Components ({mode})</h3>")?;
        buttons(&mut fh, &p, mode)?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}

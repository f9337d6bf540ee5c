//! [Rust][] interface to the [Gnuplot][] plotting program.
//!
//! Usage
//! -----
//!
//! A [`Session`] owns a `gnuplot` process and talks to it through a
//! one-way pipe.  Numeric series are written to temporary data files
//! which are handed to `gnuplot` with `plot`, `splot` or `replot`
//! commands.  The temporary files live as long as the plots that use
//! them, i.e. until [`Session::reset_plot`] or the session is closed.
//!
//! ```no_run
//! use gnuplot_pipes as gp;
//! let mut s = gp::Session::new()?;
//! s.set_style(gp::Style::Lines);
//! s.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).title("data").plot()?;
//! s.equation("x**2").plot()?;
//! s.hardcopy("target/basic.ps", gp::PsColor::Color)?;
//! # Ok::<(), gp::Error>(())
//! ```
//!
//! [Rust]: https://www.rust-lang.org/
//! [Gnuplot]: http://www.gnuplot.info/

use std::{
    borrow::Borrow,
    ffi::OsString,
    fmt::{self, Debug, Display, Formatter},
    fs::File,
    io::{self, BufWriter, Write},
    mem::swap,
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
    str::FromStr,
};
use lazy_static::lazy_static;
use ndarray::{ArrayView2, AsArray, Ix2};
use tempfile::TempPath;
use tracing::{debug, info, warn};

#[cfg(feature = "curve-sampling")]
use curve_sampling::Sampling;

/// Maximum number of temporary data files a session may hold at once.
pub const MAX_TMP_FILES: usize = 64;

/// Possible errors of gnuplot functions.
#[derive(Debug)]
pub enum Error {
    /// The program "gnuplot" was not found.
    NoGnuplot,
    /// The path contains an element that is not a directory or does
    /// not exist.
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    PermissionError,
    /// The session already holds [`MAX_TMP_FILES`] temporary files.
    TooManyTempFiles,
    /// Coordinates do not have the same shape.
    DimensionMismatch { expected: Vec<usize>, got: Vec<usize> },
    /// A plot was requested without any point.
    NoData,
    /// Other I/O errors, e.g. the gnuplot process has exited.
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::NoGnuplot =>
                write!(f, "The gnuplot program has not been found in \
                           your PATH.\nPlease install it.  \
                           See http://www.gnuplot.info/"),
            Error::FileNotFoundError =>
                write!(f, "A path contains an element that is not a \
                           directory or does not exist"),
            Error::PermissionError =>
                write!(f, "Permission denied to access or create the \
                           filesystem path"),
            Error::TooManyTempFiles =>
                write!(f, "Maximum number of temporary files ({}) \
                           reached", MAX_TMP_FILES),
            Error::DimensionMismatch { expected, got } =>
                write!(f, "Coordinates of shape {:?} given where \
                           shape {:?} was expected", got, expected),
            Error::NoData =>
                write!(f, "At least one point is needed to plot"),
            Error::Io(e) =>
                write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Error::FileNotFoundError,
            io::ErrorKind::PermissionDenied => Error::PermissionError,
            _ => Error::Io(e),
        }
    }
}

/// Return the directory of `PATH` containing the executable `name`,
/// if any.  The platform executable suffix (e.g. ".exe") is added to
/// `name`.
///
/// # Example
///
/// ```
/// use gnuplot_pipes as gp;
/// assert_eq!(gp::program_path("surely-no-such-program"), None);
/// ```
pub fn program_path(name: &str) -> Option<PathBuf> {
    let exe = format!("{}{}", name, std::env::consts::EXE_SUFFIX);
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find(|dir| is_executable(&dir.join(&exe)))
}

#[cfg(unix)]
fn is_executable(p: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match p.metadata() {
        Ok(m) => m.is_file() && m.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

#[cfg(not(unix))]
fn is_executable(p: &Path) -> bool {
    p.is_file()
}

lazy_static! {
    // Locate gnuplot once.
    static ref GNUPLOT: Option<PathBuf> = {
        program_path("gnuplot").map(|d| {
            d.join(format!("gnuplot{}", std::env::consts::EXE_SUFFIX)) })
    };
}

/// Quote `s` as a gnuplot double-quoted string.
fn quote(s: &str) -> String {
    let mut q = String::with_capacity(s.len() + 2);
    q.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => { q.push('\\'); q.push(c) }
            // A raw line break would end the command.
            '\n' => q.push_str("\\n"),
            '\r' => q.push_str("\\r"),
            _ => q.push(c),
        }
    }
    q.push('"');
    q
}

/// Plotting styles understood by gnuplot's `with` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Lines,
    Points,
    LinesPoints,
    Impulses,
    Dots,
    Steps,
    ErrorBars,
    Boxes,
    BoxErrorBars,
}

impl Style {
    const ALL: [Style; 9] = [
        Style::Lines, Style::Points, Style::LinesPoints, Style::Impulses,
        Style::Dots, Style::Steps, Style::ErrorBars, Style::Boxes,
        Style::BoxErrorBars];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Lines => "lines",
            Style::Points => "points",
            Style::LinesPoints => "linespoints",
            Style::Impulses => "impulses",
            Style::Dots => "dots",
            Style::Steps => "steps",
            Style::ErrorBars => "errorbars",
            Style::Boxes => "boxes",
            Style::BoxErrorBars => "boxerrorbars",
        }
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`Style`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStyle(pub String);

impl Display for UnknownStyle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "unknown plotting style {:?}", self.0)
    }
}

impl std::error::Error for UnknownStyle {}

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL.into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// Axes that can be labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis { X, Y, Z, X2, Y2, Cb }

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
            Axis::X2 => "x2",
            Axis::Y2 => "y2",
            Axis::Cb => "cb",
        })
    }
}

/// Color mode of the PostScript output of [`Session::hardcopy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsColor { Color, Monochrome }

impl Display for PsColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            PsColor::Color => "color",
            PsColor::Monochrome => "monochrome",
        })
    }
}

/// A point returned by the callbacks of [`Session::obj_xy`] and
/// [`Session::obj_xyz`].  `z` is ignored for 2D plots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

enum Pipe {
    Process { child: Child, stdin: BufWriter<ChildStdin> },
    Writer(Box<dyn Write>),
}

impl Pipe {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Pipe::Process { stdin, .. } => stdin,
            Pipe::Writer(w) => w.as_mut(),
        }
    }

    /// Close the pipe and wait for the process (if any) to exit.
    fn close(self) -> Result<(), Error> {
        match self {
            Pipe::Process { mut child, mut stdin } => {
                let flushed = stdin.flush();
                drop(stdin); // EOF makes gnuplot exit.
                let status = child.wait()?;
                if status.success() {
                    info!(pid = child.id(), "gnuplot exited");
                } else {
                    warn!(pid = child.id(), %status, "gnuplot exited with an error");
                }
                Ok(flushed?)
            }
            Pipe::Writer(mut w) => Ok(w.flush()?),
        }
    }
}

/// Configuration of a [`Session`] before the gnuplot process is
/// started.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    program: Option<PathBuf>,
    args: Vec<OsString>,
    style: Style,
    check_display: bool,
}

impl SessionBuilder {
    /// Use `program` instead of the `gnuplot` found in `PATH`.
    pub fn program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Add a command line argument to the gnuplot invocation.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Keep plot windows open after the session is closed.
    pub fn persist(self) -> Self {
        self.arg("-persist")
    }

    /// Initial plotting style (default: [`Style::Points`]).
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Whether to warn when no X display is available (default: `true`).
    pub fn check_display(mut self, check: bool) -> Self {
        self.check_display = check;
        self
    }

    /// Start gnuplot and return the session talking to it.
    pub fn spawn(self) -> Result<Session, Error> {
        if self.check_display
            && cfg!(all(unix, not(target_os = "macos")))
            && std::env::var_os("DISPLAY").is_none() {
            warn!("DISPLAY is not set: interactive terminals will not open");
        }
        let program = match self.program {
            Some(p) => p,
            None => GNUPLOT.clone().ok_or(Error::NoGnuplot)?,
        };
        let mut child = Command::new(&program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound { Error::NoGnuplot }
                else { Error::from(e) }
            })?;
        let stdin = match child.stdin.take() {
            Some(stdin) => BufWriter::new(stdin),
            None => return Err(Error::Io(io::Error::new(
                io::ErrorKind::BrokenPipe, "gnuplot stdin not captured"))),
        };
        info!(program = %program.display(), pid = child.id(), "gnuplot started");
        let pipe = Pipe::Process { child, stdin };
        Ok(Session::with_pipe(pipe, self.style))
    }
}

/// A running gnuplot session.
///
/// Dropping the session closes the pipe, waits for gnuplot to exit
/// and deletes the temporary files.  Use [`Session::close`] to be
/// informed of errors.
pub struct Session {
    pipe: Option<Pipe>,
    nplots: usize,
    style: String,
    term: Option<String>,
    tmp_files: Vec<TempPath>,
}

impl Debug for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        let pipe = match &self.pipe {
            Some(Pipe::Process { child, .. }) => format!("pid {}", child.id()),
            Some(Pipe::Writer(_)) => "writer".to_string(),
            None => "closed".to_string(),
        };
        f.debug_struct("Session")
            .field("pipe", &pipe)
            .field("nplots", &self.nplots)
            .field("style", &self.style)
            .field("term", &self.term)
            .field("tmp_files", &self.tmp_files)
            .finish()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            warn!(error = %e, "closing the gnuplot session");
        }
    }
}

impl Session {
    /// Start a new gnuplot process found in `PATH`.
    ///
    /// Return [`Error::NoGnuplot`] if gnuplot is not installed.
    pub fn new() -> Result<Session, Error> {
        Session::builder().spawn()
    }

    /// Return a builder to configure the session before starting it.
    pub fn builder() -> SessionBuilder {
        SessionBuilder { program: None,
                         args: vec![],
                         style: Style::Points,
                         check_display: true }
    }

    /// Return a session that writes its commands to `w` instead of a
    /// gnuplot process.  Temporary files are created as usual.
    ///
    /// # Example
    ///
    /// ```
    /// use gnuplot_pipes as gp;
    /// let mut s = gp::Session::from_writer(std::io::sink());
    /// s.xy(&[1., 2.], &[3., 4.]).plot()?;
    /// assert_eq!(s.nplots(), 1);
    /// # Ok::<(), gp::Error>(())
    /// ```
    pub fn from_writer(w: impl Write + 'static) -> Session {
        Session::with_pipe(Pipe::Writer(Box::new(w)), Style::Points)
    }

    fn with_pipe(pipe: Pipe, style: Style) -> Session {
        Session { pipe: Some(pipe),
                  nplots: 0,
                  style: style.to_string(),
                  term: None,
                  tmp_files: vec![] }
    }

    /// Close the pipe, wait for gnuplot to exit and delete the
    /// temporary files.
    pub fn close(mut self) -> Result<(), Error> {
        self.shutdown()
    }

    fn shutdown(&mut self) -> Result<(), Error> {
        // gnuplot may still read the data files until it exits.
        let res = self.pipe.take().map_or(Ok(()), Pipe::close);
        self.remove_tmp_files();
        res
    }

    fn remove_tmp_files(&mut self) {
        for p in self.tmp_files.drain(..) {
            let path = p.to_path_buf();
            match p.close() {
                Ok(()) => debug!(path = %path.display(), "temporary file removed"),
                Err(e) => warn!(path = %path.display(), error = %e,
                                "cannot remove temporary file"),
            }
        }
    }

    /// Number of plots currently displayed.
    pub fn nplots(&self) -> usize { self.nplots }

    /// Current plotting style.
    pub fn style(&self) -> &str { &self.style }

    /// Terminal set with [`Session::set_term`], if any.
    pub fn term(&self) -> Option<&str> { self.term.as_deref() }

    /// Temporary data files currently held by the session.
    pub fn tmp_files(&self) -> impl Iterator<Item = &Path> {
        self.tmp_files.iter().map(|p| &**p)
    }

    /// Send the command `cmd` to gnuplot.  Use [`format_args!`] to
    /// build commands without intermediate allocations.
    ///
    /// # Example
    ///
    /// ```
    /// use gnuplot_pipes as gp;
    /// let mut s = gp::Session::from_writer(std::io::sink());
    /// s.cmd("set grid")?;
    /// s.cmd(format_args!("set xrange [{}:{}]", -1., 1.))?;
    /// # Ok::<(), gp::Error>(())
    /// ```
    pub fn cmd(&mut self, cmd: impl Display) -> Result<(), Error> {
        let cmd = cmd.to_string();
        debug!(cmd = %cmd, "gnuplot command");
        let w = match self.pipe.as_mut() {
            Some(pipe) => pipe.writer(),
            None => return Err(Error::Io(io::Error::new(
                io::ErrorKind::BrokenPipe, "gnuplot session closed"))),
        };
        writeln!(w, "{}", cmd)?;
        w.flush()?;
        Ok(())
    }

    /// Set the plotting style of subsequent plots.
    pub fn set_style(&mut self, style: Style) -> &mut Self {
        self.style = style.to_string();
        self
    }

    /// Set the plotting style from its gnuplot name.  Unknown names
    /// fall back to [`Style::Points`].
    pub fn set_style_name(&mut self, style: &str) -> &mut Self {
        let style = style.parse().unwrap_or_else(|e: UnknownStyle| {
            warn!("{}, using \"points\"", e);
            Style::Points
        });
        self.set_style(style)
    }

    /// Append `extra` to the current style, e.g. `lc rgb "red"`.
    pub fn append_style(&mut self, extra: &str) -> &mut Self {
        self.style.push(' ');
        self.style.push_str(extra);
        self
    }

    /// Set the output terminal and its size.  The terminal is restored
    /// after [`Session::hardcopy`].
    pub fn set_term(&mut self, terminal: &str, width: u32, height: u32
    ) -> Result<(), Error> {
        let term = format!("{} size {},{}", terminal, width, height);
        self.cmd(format_args!("set terminal {}", term))?;
        self.term = Some(term);
        Ok(())
    }

    /// Set the label of `axis`.
    pub fn set_axis_label(&mut self, axis: Axis, label: &str
    ) -> Result<(), Error> {
        self.cmd(format_args!("set {}label {}", axis, quote(label)))
    }

    /// Forget the current plots: the next plot starts afresh and the
    /// temporary files are deleted.
    pub fn reset_plot(&mut self) {
        self.remove_tmp_files();
        self.nplots = 0;
    }

    /// Write the current plot to the PostScript file `path`, then
    /// restore the terminal.
    pub fn hardcopy(&mut self, path: impl AsRef<Path>, color: PsColor
    ) -> Result<(), Error> {
        if self.term.is_none() {
            self.cmd("set terminal push")?;
        }
        self.cmd(format_args!("set terminal postscript {}", color))?;
        let path = path.as_ref().to_string_lossy();
        self.cmd(format_args!("set output {}", quote(&path)))?;
        self.cmd("replot")?;
        self.cmd("set output")?;
        match self.term.clone() {
            Some(term) => self.cmd(format_args!("set terminal {}", term)),
            None => self.cmd("set terminal pop"),
        }
    }

    /// Write a new temporary data file with `write` and return its
    /// path.  The file is kept until the plots are reset.
    fn tmp_file<F>(&mut self, write: F) -> Result<PathBuf, Error>
    where F: FnOnce(&mut BufWriter<File>) -> io::Result<()> {
        if self.tmp_files.len() >= MAX_TMP_FILES {
            return Err(Error::TooManyTempFiles)
        }
        let (file, path) = tempfile::Builder::new()
            .prefix("gnuplot_tmpdatafile_")
            .tempfile()?
            .into_parts();
        let mut w = BufWriter::new(file);
        write(&mut w)?;
        w.flush()?;
        let p = path.to_path_buf();
        debug!(path = %p.display(), "temporary data file written");
        self.tmp_files.push(path);
        Ok(p)
    }

    /// Emit the command to plot `what` with `verb`, or `replot` if
    /// plots are already displayed.
    fn plot_cmd(&mut self, verb: &str, what: &str, opt: &PlotOptions<'_>
    ) -> Result<(), Error> {
        let verb = if self.nplots > 0 { "replot" } else { verb };
        let title = match opt.title {
            Some(t) => format!("title {}", quote(t)),
            None => "notitle".to_string(),
        };
        let style = opt.style.as_deref().unwrap_or(&self.style);
        let cmd = format!("{} {} {} with {}", verb, what, title, style);
        self.cmd(cmd)?;
        self.nplots += 1;
        Ok(())
    }

    fn plot_tmp<F>(&mut self, verb: &str, opt: &PlotOptions<'_>, write: F
    ) -> Result<(), Error>
    where F: FnOnce(&mut BufWriter<File>) -> io::Result<()> {
        let path = self.tmp_file(write)?;
        self.plot_cmd(verb, &quote(&path.to_string_lossy()), opt)
    }

    /// Plot `y` versus `x`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gnuplot_pipes as gp;
    /// let mut s = gp::Session::new()?;
    /// s.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).title("up")
    ///     .xy(&[1., 2., 3., 4.], &[4., 1., 3., 2.]).title("down")
    ///     .plot()?;
    /// # Ok::<(), gp::Error>(())
    /// ```
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: AsRef<[f64]> + ?Sized {
        // Data first so that more datasets can be chained, sharing
        // common options.
        XY { session: self,
             options: PlotOptions::new(),
             data: PlotData::XY(x, y),
             prev_data: vec![] }
    }

    /// Plot `y` versus its indices.
    #[must_use]
    pub fn y<'a, D>(&'a mut self, y: &'a D) -> XY<'a, D>
    where D: AsRef<[f64]> + ?Sized {
        XY { session: self,
             options: PlotOptions::new(),
             data: PlotData::Y(y),
             prev_data: vec![] }
    }

    /// Convenience function to plot X-Y coordinates coming from `xy`.
    #[must_use]
    pub fn xy_from<I>(&mut self, xy: I) -> XYFrom<'_, I>
    where I: IntoIterator,
          <I as IntoIterator>::Item: Borrow<(f64, f64)> {
        XYFrom { session: self,
                 options: PlotOptions::new(),
                 data: xy }
    }

    /// Plot the points (`x[i]`, `y[i]`, `z[i]`) in 3D.
    #[must_use]
    pub fn xyz<'a, D>(&'a mut self, x: &'a D, y: &'a D, z: &'a D
    ) -> XYZ<'a, D>
    where D: AsRef<[f64]> + ?Sized {
        XYZ { session: self, options: PlotOptions::new(), x, y, z }
    }

    /// Plot the surface `points[[i, j]]` above the grid (`i`, `j`).
    ///
    /// # Example
    ///
    /// ```
    /// use gnuplot_pipes as gp;
    /// use ndarray::Array2;
    /// let mut s = gp::Session::from_writer(std::io::sink());
    /// let z = Array2::from_shape_fn((10, 20), |(i, j)| (i * j) as f64);
    /// s.grid(&z).title("product").plot()?;
    /// # Ok::<(), gp::Error>(())
    /// ```
    #[must_use]
    pub fn grid<'a, V>(&'a mut self, points: V) -> Grid<'a>
    where V: AsArray<'a, f64, Ix2> {
        Grid { session: self, options: PlotOptions::new(),
               points: points.into() }
    }

    /// Contour plot of the surface `z` above the points (`x`, `y`).
    /// The three arrays must have the same shape.
    #[must_use]
    pub fn contour<'a, V>(&'a mut self, x: V, y: V, z: V) -> Contour<'a>
    where V: AsArray<'a, f64, Ix2> {
        Contour { session: self, options: PlotOptions::new(),
                  x: x.into(), y: y.into(), z: z.into() }
    }

    /// Plot the `n` points returned by `get_point(i, n)`,
    /// `i` = 0,…, `n`-1, in 2D.
    #[must_use]
    pub fn obj_xy<F>(&mut self, n: usize, get_point: F) -> Obj<'_, F>
    where F: FnMut(usize, usize) -> Point {
        Obj { session: self, options: PlotOptions::new(), n, get_point,
              dim3: false }
    }

    /// Plot the `n` points returned by `get_point(i, n)`,
    /// `i` = 0,…, `n`-1, in 3D.
    #[must_use]
    pub fn obj_xyz<F>(&mut self, n: usize, get_point: F) -> Obj<'_, F>
    where F: FnMut(usize, usize) -> Point {
        Obj { session: self, options: PlotOptions::new(), n, get_point,
              dim3: true }
    }

    /// Plot the gnuplot expression `equation` (e.g. "sin(x)").
    #[must_use]
    pub fn equation<'a>(&'a mut self, equation: &'a str) -> Equation<'a> {
        Equation { session: self, options: PlotOptions::new(), equation }
    }

    #[cfg(feature = "curve-sampling")]
    /// Plot the graph of the function `f` on the interval \[`a`, `b`\].
    ///
    /// # Example
    /// ```
    /// use gnuplot_pipes as gp;
    /// let mut s = gp::Session::from_writer(std::io::sink());
    /// s.fun(|x| x * x, 0., 1.).plot()?;
    /// # Ok::<(), gp::Error>(())
    /// ```
    #[must_use]
    pub fn fun<F>(&mut self, f: F, a: f64, b: f64) -> Fun<'_, F>
    where F: FnMut(f64) -> f64 {
        Fun { session: self,
              options: PlotOptions::new(),
              f, a, b,
              n: 100 }
    }
}

/// Plot `y` versus `x` in a single call and return the session so
/// that the plot stays alive until the session is dropped.
///
/// The style defaults to [`Style::Lines`] and the axis labels to "X"
/// and "Y".  Without `x`, `y` is plotted versus its indices.
pub fn plot_once(
    style: Option<Style>, xlabel: Option<&str>, ylabel: Option<&str>,
    x: Option<&[f64]>, y: &[f64], title: Option<&str>
) -> Result<Session, Error> {
    let mut s = Session::new()?;
    s.set_style(style.unwrap_or(Style::Lines));
    s.set_axis_label(Axis::X, xlabel.unwrap_or("X"))?;
    s.set_axis_label(Axis::Y, ylabel.unwrap_or("Y"))?;
    let xy = match x {
        Some(x) => s.xy(x, y),
        None => s.y(y),
    };
    match title {
        Some(t) => xy.title(t).plot()?,
        None => xy.plot()?,
    }
    Ok(s)
}

fn check_len(expected: usize, got: usize) -> Result<(), Error> {
    if expected == got { Ok(()) }
    else { Err(Error::DimensionMismatch { expected: vec![expected],
                                          got: vec![got] }) }
}

fn check_shape(expected: &ArrayView2<'_, f64>, got: &ArrayView2<'_, f64>
) -> Result<(), Error> {
    if expected.shape() == got.shape() { Ok(()) }
    else { Err(Error::DimensionMismatch {
        expected: expected.shape().to_vec(),
        got: got.shape().to_vec() }) }
}

enum PlotData<'a, D>
where D: ?Sized {
    XY(&'a D, &'a D),
    Y(&'a D),
}

impl<'a, D> PlotData<'a, D>
where D: AsRef<[f64]> + ?Sized {
    fn columns(&self) -> (Option<&[f64]>, &[f64]) {
        match *self {
            PlotData::XY(x, y) => (Some(x.as_ref()), y.as_ref()),
            PlotData::Y(y) => (None, y.as_ref()),
        }
    }

    fn check(&self) -> Result<(), Error> {
        let (x, y) = self.columns();
        if let Some(x) = x {
            check_len(x.len(), y.len())?;
        }
        if y.is_empty() { Err(Error::NoData) } else { Ok(()) }
    }

    fn write(&self, w: &mut impl Write) -> io::Result<()> {
        match self.columns() {
            (Some(x), y) => {
                for (x, y) in x.iter().zip(y) {
                    writeln!(w, "{:e} {:e}", x, y)?;
                } }
            (None, y) => {
                // Plot versus the indices.
                for (i, y) in y.iter().enumerate() {
                    writeln!(w, "{} {:e}", i, y)?;
                } }
        }
        Ok(())
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    title: Option<&'a str>,
    style: Option<String>,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { title: None, style: None }
    }
}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    /// Title of the plot in the legend.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.options.title = Some(title);
        self
    }

    /// Use `style` for this plot instead of the session style.
    #[must_use]
    pub fn style(mut self, style: Style) -> Self {
        self.options.style = Some(style.to_string());
        self
    }

    /// Use the raw `with` clause `clause` for this plot,
    /// e.g. `lines lw 2`.
    #[must_use]
    pub fn with(mut self, clause: &str) -> Self {
        self.options.style = Some(clause.to_string());
        self
    }
}}

#[must_use]
pub struct XY<'a, D>
where D: ?Sized {
    session: &'a mut Session,
    // Latest data and its setting.
    options: PlotOptions<'a>,
    data: PlotData<'a, D>,
    // Previous data with their settings.
    prev_data: Vec<(PlotOptions<'a>, PlotData<'a, D>)>,
}

impl<'a, D> XY<'a, D>
where D: AsRef<[f64]> + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<(), Error> {
        for (_, data) in &self.prev_data {
            data.check()?;
        }
        self.data.check()?;
        if self.session.tmp_files.len() + self.prev_data.len() + 1
            > MAX_TMP_FILES {
            return Err(Error::TooManyTempFiles)
        }
        for (opt, data) in &self.prev_data {
            self.session.plot_tmp("plot", opt, |w| data.write(w))?;
        }
        let data = &self.data;
        self.session.plot_tmp("plot", &self.options, |w| data.write(w))
    }

    /// Add the dataset (`x`, `y`).
    pub fn xy(mut self, x: &'a D, y: &'a D) -> Self {
        let mut data = PlotData::XY(x, y);
        swap(&mut data, &mut self.data);
        self.prev_data.push((self.options.clone(), data));
        self
    }

    /// Add the dataset `y`.
    pub fn y(mut self, y: &'a D) -> Self {
        let mut data = PlotData::Y(y);
        swap(&mut data, &mut self.data);
        self.prev_data.push((self.options.clone(), data));
        self
    }
}

#[must_use]
pub struct XYFrom<'a, I> {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    data: I,
}

impl<'a, I> XYFrom<'a, I>
where I: IntoIterator,
      <I as IntoIterator>::Item: Borrow<(f64, f64)> {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XYFrom`].
    pub fn plot(self) -> Result<(), Error> {
        let data = self.data.into_iter();
        let n = data.size_hint().0;
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        for di in data {
            let &(xi, yi) = di.borrow();
            x.push(xi);
            y.push(yi);
        }
        let data = PlotData::XY(&x[..], &y[..]);
        data.check()?;
        self.session.plot_tmp("plot", &self.options, |w| data.write(w))
    }
}

#[must_use]
pub struct XYZ<'a, D>
where D: ?Sized {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
    z: &'a D,
}

impl<'a, D> XYZ<'a, D>
where D: AsRef<[f64]> + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XYZ`].
    pub fn plot(self) -> Result<(), Error> {
        let (x, y, z): (&[f64], &[f64], &[f64]) =
            (self.x.as_ref(), self.y.as_ref(), self.z.as_ref());
        check_len(x.len(), y.len())?;
        check_len(x.len(), z.len())?;
        if x.is_empty() { return Err(Error::NoData) }
        self.session.plot_tmp("splot", &self.options, |w| {
            for ((x, y), z) in x.iter().zip(y).zip(z) {
                writeln!(w, "{:e} {:e} {:e}", x, y, z)?;
            }
            Ok(())
        })
    }
}

#[must_use]
pub struct Grid<'a> {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    points: ArrayView2<'a, f64>,
}

impl<'a> Grid<'a> {
    set_plotoptions!();

    /// Plot the data with the options specified in [`Grid`].
    pub fn plot(self) -> Result<(), Error> {
        let points = self.points;
        if points.is_empty() { return Err(Error::NoData) }
        self.session.plot_tmp("splot", &self.options, |w| {
            for (i, row) in points.outer_iter().enumerate() {
                for (j, z) in row.iter().enumerate() {
                    writeln!(w, "{} {} {:e}", i, j, z)?;
                }
                writeln!(w)?;
            }
            Ok(())
        })
    }
}

#[must_use]
pub struct Contour<'a> {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    x: ArrayView2<'a, f64>,
    y: ArrayView2<'a, f64>,
    z: ArrayView2<'a, f64>,
}

impl<'a> Contour<'a> {
    set_plotoptions!();

    /// Plot the contour lines with the options specified in [`Contour`].
    pub fn plot(self) -> Result<(), Error> {
        let (x, y, z) = (self.x, self.y, self.z);
        check_shape(&z, &x)?;
        check_shape(&z, &y)?;
        if z.is_empty() { return Err(Error::NoData) }
        let path = self.session.tmp_file(|w| {
            for ((xr, yr), zr) in x.outer_iter().zip(y.outer_iter())
                .zip(z.outer_iter()) {
                for ((x, y), z) in xr.iter().zip(&yr).zip(&zr) {
                    writeln!(w, "{:e} {:e} {:e}", x, y, z)?;
                }
                writeln!(w)?;
            }
            Ok(())
        })?;
        self.session.cmd("unset surface")?;
        self.session.cmd("set contour base")?;
        self.session.cmd("set view map")?;
        self.session.cmd("set view 0,0")?;
        self.session.plot_cmd("splot", &quote(&path.to_string_lossy()),
                              &self.options)
    }
}

#[must_use]
pub struct Obj<'a, F> {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    n: usize,
    get_point: F,
    dim3: bool,
}

impl<'a, F> Obj<'a, F>
where F: FnMut(usize, usize) -> Point {
    set_plotoptions!();

    /// Plot the points with the options specified in [`Obj`].
    pub fn plot(mut self) -> Result<(), Error> {
        let n = self.n;
        if n == 0 { return Err(Error::NoData) }
        let get_point = &mut self.get_point;
        let dim3 = self.dim3;
        let verb = if dim3 { "splot" } else { "plot" };
        self.session.plot_tmp(verb, &self.options, |w| {
            for i in 0 .. n {
                let p = get_point(i, n);
                if dim3 {
                    writeln!(w, "{:e} {:e} {:e}", p.x, p.y, p.z)?;
                } else {
                    writeln!(w, "{:e} {:e}", p.x, p.y)?;
                }
            }
            Ok(())
        })
    }
}

#[must_use]
pub struct Equation<'a> {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    equation: &'a str,
}

impl<'a> Equation<'a> {
    set_plotoptions!();

    /// Plot the equation with the options specified in [`Equation`].
    pub fn plot(self) -> Result<(), Error> {
        self.session.plot_cmd("plot", self.equation, &self.options)
    }
}

/// Options to plot functions (require the library [curve-sampling][]).
///
/// [curve-sampling]: https://crates.io/crates/curve-sampling
#[must_use]
pub struct Fun<'a, F> {
    session: &'a mut Session,
    options: PlotOptions<'a>,
    f: F,
    a: f64, // [a, b] is the interval on which we want to plot f.
    b: f64,
    n: usize,
}

#[cfg(feature = "curve-sampling")]
impl<'a, F> Fun<'a, F>
where F: FnMut(f64) -> f64 {
    set_plotoptions!();

    /// Plot the data with the options specified in [`Fun`].
    pub fn plot(mut self) -> Result<(), Error> {
        let s = Sampling::fun(&mut self.f, self.a, self.b)
            .n(self.n).build();
        if s.iter().all(|p| p.is_none()) { return Err(Error::NoData) }
        self.session.plot_tmp("plot", &self.options, |w| s.write(w))
    }

    /// Set the maximum number of evaluations of the function to build
    /// the sampling.  Panic if `n` < 2.
    pub fn n(mut self, n: usize) -> Self {
        if n < 2 {
            panic!("gnuplot_pipes::Fun::n: at least two points are required.");
        }
        self.n = n;
        self
    }
}


#[cfg(doctest)]
doc_comment::doctest!("../README.md");

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, fs, rc::Rc};
    use ndarray::{array, Array2};

    /// Writer recording the commands sent to "gnuplot".
    #[derive(Clone, Default)]
    struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    impl Capture {
        fn lines(&self) -> Vec<String> {
            String::from_utf8(RefCell::borrow(&self.0).clone()).unwrap()
                .lines().map(|l| l.to_string()).collect()
        }
    }

    fn session() -> (Session, Capture) {
        let c = Capture::default();
        (Session::from_writer(c.clone()), c)
    }

    fn tmp_contents(s: &Session) -> Vec<String> {
        s.tmp_files().map(|p| fs::read_to_string(p).unwrap()).collect()
    }

    #[test]
    fn xy_plot() -> Result<(), Error> {
        let (mut s, c) = session();
        s.xy(&[1., 2.], &[0.5, 4.]).title("sq").plot()?;
        let path = s.tmp_files().next().unwrap().to_path_buf();
        assert_eq!(c.lines(),
                   [format!("plot {} title \"sq\" with points",
                            quote(&path.to_string_lossy()))]);
        assert_eq!(tmp_contents(&s), ["1e0 5e-1\n2e0 4e0\n"]);
        assert_eq!(s.nplots(), 1);
        Ok(())
    }

    #[test]
    fn replot_and_reset() -> Result<(), Error> {
        let (mut s, c) = session();
        s.y(&[1., 2.]).plot()?;
        s.equation("sin(x)").style(Style::Lines).plot()?;
        assert_eq!(s.nplots(), 2);
        assert_eq!(c.lines()[1], "replot sin(x) notitle with lines");
        assert_eq!(tmp_contents(&s), ["0 1e0\n1 2e0\n"]);
        let path = s.tmp_files().next().unwrap().to_path_buf();
        s.reset_plot();
        assert!(!path.exists());
        assert_eq!(s.nplots(), 0);
        s.equation("cos(x)").plot()?;
        assert_eq!(c.lines()[2], "plot cos(x) notitle with points");
        Ok(())
    }

    #[test]
    fn chained_datasets() -> Result<(), Error> {
        let (mut s, c) = session();
        s.xy(&[1., 2.], &[1., 2.]).title("a")
            .xy(&[1., 2.], &[2., 1.]).title("b")
            .plot()?;
        let lines = c.lines();
        assert!(lines[0].starts_with("plot \""));
        assert!(lines[0].ends_with("title \"a\" with points"));
        assert!(lines[1].starts_with("replot \""));
        assert!(lines[1].ends_with("title \"b\" with points"));
        assert_eq!(s.tmp_files().count(), 2);
        Ok(())
    }

    #[test]
    fn xy_from_pairs() -> Result<(), Error> {
        let (mut s, _) = session();
        s.xy_from([(1., 2.), (3., 4.)]).plot()?;
        assert_eq!(tmp_contents(&s), ["1e0 2e0\n3e0 4e0\n"]);
        Ok(())
    }

    #[test]
    fn mismatch_emits_nothing() {
        let (mut s, c) = session();
        let r = s.xy(&[1., 2.][..], &[1.][..]).plot();
        assert!(matches!(r, Err(Error::DimensionMismatch { .. })));
        let empty: [f64; 0] = [];
        let r = s.xyz(&[1.][..], &[1.][..], &empty[..]).plot();
        assert!(matches!(r, Err(Error::DimensionMismatch { .. })));
        assert!(matches!(s.y(&empty).plot(), Err(Error::NoData)));
        assert!(matches!(s.obj_xy(0, |_, _| Point::default()).plot(),
                         Err(Error::NoData)));
        assert!(c.lines().is_empty());
        assert_eq!(s.tmp_files().count(), 0);
        assert_eq!(s.nplots(), 0);
    }

    #[test]
    fn styles() {
        let (mut s, _) = session();
        assert_eq!(s.style(), "points");
        s.set_style(Style::Lines).append_style("lc rgb \"red\"");
        assert_eq!(s.style(), "lines lc rgb \"red\"");
        s.set_style_name("boxerrorbars");
        assert_eq!(s.style(), "boxerrorbars");
        s.set_style_name("nonsense");
        assert_eq!(s.style(), "points");
        assert_eq!("linespoints".parse(), Ok(Style::LinesPoints));
        assert!("Lines".parse::<Style>().is_err());
    }

    #[test]
    fn labels_are_quoted() -> Result<(), Error> {
        let (mut s, c) = session();
        s.set_axis_label(Axis::X, "a \"b\"")?;
        s.set_axis_label(Axis::Cb, r"c:\d")?;
        s.equation("x").title("a\nset output \"/tmp/x\"\r").plot()?;
        assert_eq!(c.lines(), [
            r#"set xlabel "a \"b\"""#,
            r#"set cblabel "c:\\d""#,
            r#"plot x title "a\nset output \"/tmp/x\"\r" with points"#]);
        Ok(())
    }

    #[test]
    fn with_clause() -> Result<(), Error> {
        let (mut s, c) = session();
        s.equation("x").with("lines lw 2").plot()?;
        assert_eq!(c.lines(), ["plot x notitle with lines lw 2"]);
        assert_eq!(s.style(), "points");
        Ok(())
    }

    #[test]
    fn empty_arrays_emit_nothing() {
        let (mut s, c) = session();
        let z = Array2::<f64>::zeros((0, 3));
        assert!(matches!(s.grid(&z).plot(), Err(Error::NoData)));
        assert!(matches!(s.contour(&z, &z, &z).plot(), Err(Error::NoData)));
        let pairs: [(f64, f64); 0] = [];
        assert!(matches!(s.xy_from(pairs).plot(), Err(Error::NoData)));
        assert!(c.lines().is_empty());
        assert_eq!(s.tmp_files().count(), 0);
        assert_eq!(s.nplots(), 0);
    }

    #[test]
    fn chained_datasets_respect_tmp_limit() -> Result<(), Error> {
        let (mut s, c) = session();
        for _ in 0 .. MAX_TMP_FILES - 1 {
            s.y(&[1.]).plot()?;
        }
        let sent = c.lines().len();
        let r = s.y(&[1.]).title("a").y(&[2.]).title("b").plot();
        assert!(matches!(r, Err(Error::TooManyTempFiles)));
        assert_eq!(c.lines().len(), sent);
        assert_eq!(s.nplots(), MAX_TMP_FILES - 1);
        assert_eq!(s.tmp_files().count(), MAX_TMP_FILES - 1);
        s.y(&[1.]).plot()?;
        assert_eq!(s.nplots(), MAX_TMP_FILES);
        Ok(())
    }

    #[test]
    fn hardcopy_restores_term() -> Result<(), Error> {
        let (mut s, c) = session();
        s.set_term("png", 640, 480)?;
        assert_eq!(s.term(), Some("png size 640,480"));
        s.hardcopy("out.ps", PsColor::Monochrome)?;
        assert_eq!(c.lines(), ["set terminal png size 640,480",
                               "set terminal postscript monochrome",
                               "set output \"out.ps\"",
                               "replot",
                               "set output",
                               "set terminal png size 640,480"]);
        Ok(())
    }

    #[test]
    fn hardcopy_without_term() -> Result<(), Error> {
        let (mut s, c) = session();
        s.hardcopy("out.ps", PsColor::Color)?;
        let lines = c.lines();
        assert_eq!(lines.first().map(|l| l.as_str()), Some("set terminal push"));
        assert_eq!(lines[1], "set terminal postscript color");
        assert_eq!(lines.last().map(|l| l.as_str()), Some("set terminal pop"));
        Ok(())
    }

    #[test]
    fn splot_points() -> Result<(), Error> {
        let (mut s, c) = session();
        s.xyz(&[1., 2.], &[3., 4.], &[5., 6.]).plot()?;
        assert!(c.lines()[0].starts_with("splot \""));
        assert_eq!(tmp_contents(&s), ["1e0 3e0 5e0\n2e0 4e0 6e0\n"]);
        Ok(())
    }

    #[test]
    fn grid_rows_separated() -> Result<(), Error> {
        let (mut s, c) = session();
        let z = array![[1., 2.], [3., 4.]];
        s.grid(&z).title("g").plot()?;
        assert!(c.lines()[0].starts_with("splot \""));
        assert_eq!(tmp_contents(&s),
                   ["0 0 1e0\n0 1 2e0\n\n1 0 3e0\n1 1 4e0\n\n"]);
        Ok(())
    }

    #[test]
    fn contour_commands() -> Result<(), Error> {
        let (mut s, c) = session();
        let x = Array2::from_shape_fn((2, 3), |(i, _)| i as f64);
        let y = Array2::from_shape_fn((2, 3), |(_, j)| j as f64);
        let z = &x * &y;
        s.contour(&x, &y, &z).plot()?;
        let lines = c.lines();
        assert_eq!(lines[.. 4], ["unset surface", "set contour base",
                                 "set view map", "set view 0,0"]);
        assert!(lines[4].starts_with("splot \""));
        assert!(lines[4].ends_with("notitle with points"));
        assert_eq!(tmp_contents(&s)[0].lines().count(), 8);
        let bad = Array2::zeros((3, 2));
        let r = s.contour(&x, &bad, &z).plot();
        assert!(matches!(r, Err(Error::DimensionMismatch { .. })));
        Ok(())
    }

    #[test]
    fn obj_callbacks() -> Result<(), Error> {
        let (mut s, c) = session();
        let mut calls = vec![];
        s.obj_xyz(3, |i, n| {
            calls.push((i, n));
            Point { x: i as f64, y: 1., z: 2. } }).plot()?;
        assert_eq!(calls, [(0, 3), (1, 3), (2, 3)]);
        s.obj_xy(2, |i, _| Point { x: i as f64, y: 3., z: 9. })
            .title("obj").plot()?;
        let lines = c.lines();
        assert!(lines[0].starts_with("splot \""));
        assert!(lines[1].starts_with("replot \""));
        assert_eq!(tmp_contents(&s),
                   ["0e0 1e0 2e0\n1e0 1e0 2e0\n2e0 1e0 2e0\n",
                    "0e0 3e0\n1e0 3e0\n"]);
        Ok(())
    }

    #[test]
    fn too_many_tmp_files() -> Result<(), Error> {
        let (mut s, _) = session();
        for _ in 0 .. MAX_TMP_FILES {
            s.y(&[1.]).plot()?;
        }
        assert!(matches!(s.y(&[1.]).plot(), Err(Error::TooManyTempFiles)));
        assert_eq!(s.nplots(), MAX_TMP_FILES);
        s.reset_plot();
        s.y(&[1.]).plot()?;
        Ok(())
    }

    #[test]
    fn close_removes_tmp_files() -> Result<(), Error> {
        let (mut s, _) = session();
        s.y(&[1., 2.]).plot()?;
        let path = s.tmp_files().next().unwrap().to_path_buf();
        assert!(path.exists());
        s.close()?;
        assert!(!path.exists());
        Ok(())
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
        fn flush(&mut self) -> io::Result<()> { Ok(()) }
    }

    #[test]
    fn write_errors_are_reported() {
        let mut s = Session::from_writer(Broken);
        assert!(matches!(s.cmd("set grid"), Err(Error::Io(_))));
        assert!(matches!(s.equation("x").plot(), Err(Error::Io(_))));
        assert_eq!(s.nplots(), 0);
    }

    #[test]
    fn debug_handle() -> Result<(), Error> {
        let (mut s, _) = session();
        s.y(&[1.]).plot()?;
        let d = format!("{:?}", s);
        assert!(d.contains("nplots: 1"));
        assert!(d.contains("gnuplot_tmpdatafile_"));
        assert!(d.contains("writer"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn finds_sh() {
        let dir = program_path("sh").expect("sh in PATH");
        assert!(dir.join("sh").is_file());
    }

    #[cfg(unix)]
    #[test]
    fn exited_process() -> Result<(), Error> {
        let mut s = Session::builder().program("true")
            .check_display(false).spawn()?;
        assert!(format!("{:?}", s).contains("pid"));
        std::thread::sleep(std::time::Duration::from_millis(300));
        assert!(matches!(s.cmd("set grid"), Err(Error::Io(_))));
        assert!(matches!(s.equation("x").plot(), Err(Error::Io(_))));
        assert_eq!(s.nplots(), 0);
        // Closing still waits for the process and reports the dead pipe.
        assert!(matches!(s.close(), Err(Error::Io(_))));
        Ok(())
    }

    #[test]
    fn missing_program() {
        let r = Session::builder().program("surely-no-such-gnuplot")
            .check_display(false).spawn();
        assert!(matches!(r, Err(Error::NoGnuplot)));
    }

    #[cfg(feature = "curve-sampling")]
    #[test]
    fn fun_sampling() -> Result<(), Error> {
        let (mut s, c) = session();
        s.fun(|x| x * x, 0., 1.).title("x²").plot()?;
        assert!(c.lines()[0].ends_with("title \"x²\" with points"));
        let data = &tmp_contents(&s)[0];
        assert!(data.lines().count() >= 2);
        assert!(data.starts_with("0e0 0e0"));
        Ok(())
    }

    #[cfg(feature = "curve-sampling")]
    #[test]
    fn fun_without_points() {
        let (mut s, c) = session();
        assert!(matches!(s.fun(|_| f64::NAN, 1., 1.).plot(),
                         Err(Error::NoData)));
        assert!(c.lines().is_empty());
        assert_eq!(s.tmp_files().count(), 0);
        assert_eq!(s.nplots(), 0);
    }
}

//! The GL 1.0-2.0 core plus `ARB_imaging` and `ARB_framebuffer_object`
//!
//! Every entry point is resolved on its first call and reused afterwards.
//! Methods keep the C argument order and names (`type` becomes `type_`);
//! pointer arguments are raw and must be valid for the duration of the call.

use std::ffi::c_void;

use gloam_core::dispatch_table;

use crate::types::*;

dispatch_table! {
    /// OpenGL entry points for one context, resolved lazily
    ///
    /// Build one per context on platforms where function pointers are
    /// context-specific (WGL). Elsewhere one table serves every context.
    pub struct Gl;

    // ARB_imaging
    fn glBlendColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) as blend_color;
    fn glBlendEquation(mode: GLenum) as blend_equation;
    fn glColorSubTable(target: GLenum, start: GLsizei, count: GLsizei, format: GLenum, type_: GLenum, data: *const c_void) as color_sub_table;
    fn glColorTable(target: GLenum, internalformat: GLenum, width: GLsizei, format: GLenum, type_: GLenum, table: *const c_void) as color_table;
    fn glColorTableParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat) as color_table_parameterfv;
    fn glColorTableParameteriv(target: GLenum, pname: GLenum, params: *const GLint) as color_table_parameteriv;
    fn glConvolutionFilter1D(target: GLenum, internalformat: GLenum, width: GLsizei, format: GLenum, type_: GLenum, image: *const c_void) as convolution_filter_1d;
    fn glConvolutionFilter2D(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, image: *const c_void) as convolution_filter_2d;
    fn glConvolutionParameterf(target: GLenum, pname: GLenum, params: GLfloat) as convolution_parameterf;
    fn glConvolutionParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat) as convolution_parameterfv;
    fn glConvolutionParameteri(target: GLenum, pname: GLenum, params: GLint) as convolution_parameteri;
    fn glConvolutionParameteriv(target: GLenum, pname: GLenum, params: *const GLint) as convolution_parameteriv;
    fn glCopyColorSubTable(target: GLenum, start: GLsizei, x: GLint, y: GLint, width: GLsizei) as copy_color_sub_table;
    fn glCopyColorTable(target: GLenum, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei) as copy_color_table;
    fn glCopyConvolutionFilter1D(target: GLenum, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei) as copy_convolution_filter_1d;
    fn glCopyConvolutionFilter2D(target: GLenum, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei) as copy_convolution_filter_2d;
    fn glGetColorTable(target: GLenum, format: GLenum, type_: GLenum, table: *mut c_void) as get_color_table;
    fn glGetColorTableParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat) as get_color_table_parameterfv;
    fn glGetColorTableParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_color_table_parameteriv;
    fn glGetConvolutionFilter(target: GLenum, format: GLenum, type_: GLenum, image: *mut c_void) as get_convolution_filter;
    fn glGetConvolutionParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat) as get_convolution_parameterfv;
    fn glGetConvolutionParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_convolution_parameteriv;
    fn glGetHistogram(target: GLenum, reset: GLboolean, format: GLenum, type_: GLenum, values: *mut c_void) as get_histogram;
    fn glGetHistogramParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat) as get_histogram_parameterfv;
    fn glGetHistogramParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_histogram_parameteriv;
    fn glGetMinmax(target: GLenum, reset: GLboolean, format: GLenum, type_: GLenum, values: *mut c_void) as get_minmax;
    fn glGetMinmaxParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat) as get_minmax_parameterfv;
    fn glGetMinmaxParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_minmax_parameteriv;
    fn glGetSeparableFilter(target: GLenum, format: GLenum, type_: GLenum, row: *mut c_void, column: *mut c_void, span: *mut c_void) as get_separable_filter;
    fn glHistogram(target: GLenum, width: GLsizei, internalformat: GLenum, sink: GLboolean) as histogram;
    fn glMinmax(target: GLenum, internalformat: GLenum, sink: GLboolean) as minmax;
    fn glResetHistogram(target: GLenum) as reset_histogram;
    fn glResetMinmax(target: GLenum) as reset_minmax;
    fn glSeparableFilter2D(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, row: *const c_void, column: *const c_void) as separable_filter_2d;

    // ARB_framebuffer_object
    fn glBindFramebuffer(target: GLenum, framebuffer: GLuint) as bind_framebuffer;
    fn glBindRenderbuffer(target: GLenum, renderbuffer: GLuint) as bind_renderbuffer;
    fn glBlitFramebuffer(srcX0: GLint, srcY0: GLint, srcX1: GLint, srcY1: GLint, dstX0: GLint, dstY0: GLint, dstX1: GLint, dstY1: GLint, mask: GLbitfield, filter: GLenum) as blit_framebuffer;
    fn glCheckFramebufferStatus(target: GLenum) -> GLenum as check_framebuffer_status;
    fn glDeleteFramebuffers(n: GLsizei, framebuffers: *const GLuint) as delete_framebuffers;
    fn glDeleteRenderbuffers(n: GLsizei, renderbuffers: *const GLuint) as delete_renderbuffers;
    fn glFramebufferRenderbuffer(target: GLenum, attachment: GLenum, renderbuffertarget: GLenum, renderbuffer: GLuint) as framebuffer_renderbuffer;
    fn glFramebufferTexture1D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) as framebuffer_texture_1d;
    fn glFramebufferTexture2D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint) as framebuffer_texture_2d;
    fn glFramebufferTexture3D(target: GLenum, attachment: GLenum, textarget: GLenum, texture: GLuint, level: GLint, zoffset: GLint) as framebuffer_texture_3d;
    fn glFramebufferTextureLayer(target: GLenum, attachment: GLenum, texture: GLuint, level: GLint, layer: GLint) as framebuffer_texture_layer;
    fn glGenFramebuffers(n: GLsizei, framebuffers: *mut GLuint) as gen_framebuffers;
    fn glGenRenderbuffers(n: GLsizei, renderbuffers: *mut GLuint) as gen_renderbuffers;
    fn glGenerateMipmap(target: GLenum) as generate_mipmap;
    fn glGetFramebufferAttachmentParameteriv(target: GLenum, attachment: GLenum, pname: GLenum, params: *mut GLint) as get_framebuffer_attachment_parameteriv;
    fn glGetRenderbufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_renderbuffer_parameteriv;
    fn glIsFramebuffer(framebuffer: GLuint) -> GLboolean as is_framebuffer;
    fn glIsRenderbuffer(renderbuffer: GLuint) -> GLboolean as is_renderbuffer;
    fn glRenderbufferStorage(target: GLenum, internalformat: GLenum, width: GLsizei, height: GLsizei) as renderbuffer_storage;
    fn glRenderbufferStorageMultisample(target: GLenum, samples: GLsizei, internalformat: GLenum, width: GLsizei, height: GLsizei) as renderbuffer_storage_multisample;

    // GL 1.0
    fn glAccum(op: GLenum, value: GLfloat) as accum;
    fn glAlphaFunc(func: GLenum, ref_: GLfloat) as alpha_func;
    fn glBegin(mode: GLenum) as begin;
    fn glBitmap(width: GLsizei, height: GLsizei, xorig: GLfloat, yorig: GLfloat, xmove: GLfloat, ymove: GLfloat, bitmap: *const GLubyte) as bitmap;
    fn glBlendFunc(sfactor: GLenum, dfactor: GLenum) as blend_func;
    fn glCallList(list: GLuint) as call_list;
    fn glCallLists(n: GLsizei, type_: GLenum, lists: *const c_void) as call_lists;
    fn glClear(mask: GLbitfield) as clear;
    fn glClearAccum(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) as clear_accum;
    fn glClearColor(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) as clear_color;
    fn glClearDepth(depth: GLdouble) as clear_depth;
    fn glClearIndex(c: GLfloat) as clear_index;
    fn glClearStencil(s: GLint) as clear_stencil;
    fn glClipPlane(plane: GLenum, equation: *const GLdouble) as clip_plane;
    fn glColor3b(red: GLbyte, green: GLbyte, blue: GLbyte) as color_3b;
    fn glColor3bv(v: *const GLbyte) as color_3bv;
    fn glColor3d(red: GLdouble, green: GLdouble, blue: GLdouble) as color_3d;
    fn glColor3dv(v: *const GLdouble) as color_3dv;
    fn glColor3f(red: GLfloat, green: GLfloat, blue: GLfloat) as color_3f;
    fn glColor3fv(v: *const GLfloat) as color_3fv;
    fn glColor3i(red: GLint, green: GLint, blue: GLint) as color_3i;
    fn glColor3iv(v: *const GLint) as color_3iv;
    fn glColor3s(red: GLshort, green: GLshort, blue: GLshort) as color_3s;
    fn glColor3sv(v: *const GLshort) as color_3sv;
    fn glColor3ub(red: GLubyte, green: GLubyte, blue: GLubyte) as color_3ub;
    fn glColor3ubv(v: *const GLubyte) as color_3ubv;
    fn glColor3ui(red: GLuint, green: GLuint, blue: GLuint) as color_3ui;
    fn glColor3uiv(v: *const GLuint) as color_3uiv;
    fn glColor3us(red: GLushort, green: GLushort, blue: GLushort) as color_3us;
    fn glColor3usv(v: *const GLushort) as color_3usv;
    fn glColor4b(red: GLbyte, green: GLbyte, blue: GLbyte, alpha: GLbyte) as color_4b;
    fn glColor4bv(v: *const GLbyte) as color_4bv;
    fn glColor4d(red: GLdouble, green: GLdouble, blue: GLdouble, alpha: GLdouble) as color_4d;
    fn glColor4dv(v: *const GLdouble) as color_4dv;
    fn glColor4f(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) as color_4f;
    fn glColor4fv(v: *const GLfloat) as color_4fv;
    fn glColor4i(red: GLint, green: GLint, blue: GLint, alpha: GLint) as color_4i;
    fn glColor4iv(v: *const GLint) as color_4iv;
    fn glColor4s(red: GLshort, green: GLshort, blue: GLshort, alpha: GLshort) as color_4s;
    fn glColor4sv(v: *const GLshort) as color_4sv;
    fn glColor4ub(red: GLubyte, green: GLubyte, blue: GLubyte, alpha: GLubyte) as color_4ub;
    fn glColor4ubv(v: *const GLubyte) as color_4ubv;
    fn glColor4ui(red: GLuint, green: GLuint, blue: GLuint, alpha: GLuint) as color_4ui;
    fn glColor4uiv(v: *const GLuint) as color_4uiv;
    fn glColor4us(red: GLushort, green: GLushort, blue: GLushort, alpha: GLushort) as color_4us;
    fn glColor4usv(v: *const GLushort) as color_4usv;
    fn glColorMask(red: GLboolean, green: GLboolean, blue: GLboolean, alpha: GLboolean) as color_mask;
    fn glColorMaterial(face: GLenum, mode: GLenum) as color_material;
    fn glCopyPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, type_: GLenum) as copy_pixels;
    fn glCullFace(mode: GLenum) as cull_face;
    fn glDeleteLists(list: GLuint, range: GLsizei) as delete_lists;
    fn glDepthFunc(func: GLenum) as depth_func;
    fn glDepthMask(flag: GLboolean) as depth_mask;
    fn glDepthRange(ren_near: GLdouble, ren_far: GLdouble) as depth_range;
    fn glDisable(cap: GLenum) as disable;
    fn glDrawBuffer(buf: GLenum) as draw_buffer;
    fn glDrawPixels(width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) as draw_pixels;
    fn glEdgeFlag(flag: GLboolean) as edge_flag;
    fn glEdgeFlagv(flag: *const GLboolean) as edge_flagv;
    fn glEnable(cap: GLenum) as enable;
    fn glEnd() as end;
    fn glEndList() as end_list;
    fn glEvalCoord1d(u: GLdouble) as eval_coord_1d;
    fn glEvalCoord1dv(u: *const GLdouble) as eval_coord_1dv;
    fn glEvalCoord1f(u: GLfloat) as eval_coord_1f;
    fn glEvalCoord1fv(u: *const GLfloat) as eval_coord_1fv;
    fn glEvalCoord2d(u: GLdouble, v: GLdouble) as eval_coord_2d;
    fn glEvalCoord2dv(u: *const GLdouble) as eval_coord_2dv;
    fn glEvalCoord2f(u: GLfloat, v: GLfloat) as eval_coord_2f;
    fn glEvalCoord2fv(u: *const GLfloat) as eval_coord_2fv;
    fn glEvalMesh1(mode: GLenum, i1: GLint, i2: GLint) as eval_mesh_1;
    fn glEvalMesh2(mode: GLenum, i1: GLint, i2: GLint, j1: GLint, j2: GLint) as eval_mesh_2;
    fn glEvalPoint1(i: GLint) as eval_point_1;
    fn glEvalPoint2(i: GLint, j: GLint) as eval_point_2;
    fn glFeedbackBuffer(size: GLsizei, type_: GLenum, buffer: *mut GLfloat) as feedback_buffer;
    fn glFinish() as finish;
    fn glFlush() as flush;
    fn glFogf(pname: GLenum, param: GLfloat) as fogf;
    fn glFogfv(pname: GLenum, params: *const GLfloat) as fogfv;
    fn glFogi(pname: GLenum, param: GLint) as fogi;
    fn glFogiv(pname: GLenum, params: *const GLint) as fogiv;
    fn glFrontFace(mode: GLenum) as front_face;
    fn glFrustum(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, zNear: GLdouble, zFar: GLdouble) as frustum;
    fn glGenLists(range: GLsizei) -> GLuint as gen_lists;
    fn glGetBooleanv(pname: GLenum, data: *mut GLboolean) as get_booleanv;
    fn glGetClipPlane(plane: GLenum, equation: *mut GLdouble) as get_clip_plane;
    fn glGetDoublev(pname: GLenum, data: *mut GLdouble) as get_doublev;
    fn glGetError() -> GLenum as get_error;
    fn glGetFloatv(pname: GLenum, data: *mut GLfloat) as get_floatv;
    fn glGetIntegerv(pname: GLenum, data: *mut GLint) as get_integerv;
    fn glGetLightfv(light: GLenum, pname: GLenum, params: *mut GLfloat) as get_lightfv;
    fn glGetLightiv(light: GLenum, pname: GLenum, params: *mut GLint) as get_lightiv;
    fn glGetMapdv(target: GLenum, query: GLenum, v: *mut GLdouble) as get_mapdv;
    fn glGetMapfv(target: GLenum, query: GLenum, v: *mut GLfloat) as get_mapfv;
    fn glGetMapiv(target: GLenum, query: GLenum, v: *mut GLint) as get_mapiv;
    fn glGetMaterialfv(face: GLenum, pname: GLenum, params: *mut GLfloat) as get_materialfv;
    fn glGetMaterialiv(face: GLenum, pname: GLenum, params: *mut GLint) as get_materialiv;
    fn glGetPixelMapfv(map: GLenum, values: *mut GLfloat) as get_pixel_mapfv;
    fn glGetPixelMapuiv(map: GLenum, values: *mut GLuint) as get_pixel_mapuiv;
    fn glGetPixelMapusv(map: GLenum, values: *mut GLushort) as get_pixel_mapusv;
    fn glGetPolygonStipple(mask: *mut GLubyte) as get_polygon_stipple;
    fn glGetString(name: GLenum) -> *const GLubyte as get_string;
    fn glGetTexEnvfv(target: GLenum, pname: GLenum, params: *mut GLfloat) as get_tex_envfv;
    fn glGetTexEnviv(target: GLenum, pname: GLenum, params: *mut GLint) as get_tex_enviv;
    fn glGetTexGendv(coord: GLenum, pname: GLenum, params: *mut GLdouble) as get_tex_gendv;
    fn glGetTexGenfv(coord: GLenum, pname: GLenum, params: *mut GLfloat) as get_tex_genfv;
    fn glGetTexGeniv(coord: GLenum, pname: GLenum, params: *mut GLint) as get_tex_geniv;
    fn glGetTexImage(target: GLenum, level: GLint, format: GLenum, type_: GLenum, pixels: *mut c_void) as get_tex_image;
    fn glGetTexLevelParameterfv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLfloat) as get_tex_level_parameterfv;
    fn glGetTexLevelParameteriv(target: GLenum, level: GLint, pname: GLenum, params: *mut GLint) as get_tex_level_parameteriv;
    fn glGetTexParameterfv(target: GLenum, pname: GLenum, params: *mut GLfloat) as get_tex_parameterfv;
    fn glGetTexParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_tex_parameteriv;
    fn glHint(target: GLenum, mode: GLenum) as hint;
    fn glIndexMask(mask: GLuint) as index_mask;
    fn glIndexd(c: GLdouble) as indexd;
    fn glIndexdv(c: *const GLdouble) as indexdv;
    fn glIndexf(c: GLfloat) as indexf;
    fn glIndexfv(c: *const GLfloat) as indexfv;
    fn glIndexi(c: GLint) as indexi;
    fn glIndexiv(c: *const GLint) as indexiv;
    fn glIndexs(c: GLshort) as indexs;
    fn glIndexsv(c: *const GLshort) as indexsv;
    fn glInitNames() as init_names;
    fn glIsEnabled(cap: GLenum) -> GLboolean as is_enabled;
    fn glIsList(list: GLuint) -> GLboolean as is_list;
    fn glLightModelf(pname: GLenum, param: GLfloat) as light_modelf;
    fn glLightModelfv(pname: GLenum, params: *const GLfloat) as light_modelfv;
    fn glLightModeli(pname: GLenum, param: GLint) as light_modeli;
    fn glLightModeliv(pname: GLenum, params: *const GLint) as light_modeliv;
    fn glLightf(light: GLenum, pname: GLenum, param: GLfloat) as lightf;
    fn glLightfv(light: GLenum, pname: GLenum, params: *const GLfloat) as lightfv;
    fn glLighti(light: GLenum, pname: GLenum, param: GLint) as lighti;
    fn glLightiv(light: GLenum, pname: GLenum, params: *const GLint) as lightiv;
    fn glLineStipple(factor: GLint, pattern: GLushort) as line_stipple;
    fn glLineWidth(width: GLfloat) as line_width;
    fn glListBase(base: GLuint) as list_base;
    fn glLoadIdentity() as load_identity;
    fn glLoadMatrixd(m: *const GLdouble) as load_matrixd;
    fn glLoadMatrixf(m: *const GLfloat) as load_matrixf;
    fn glLoadName(name: GLuint) as load_name;
    fn glLogicOp(opcode: GLenum) as logic_op;
    fn glMap1d(target: GLenum, u1: GLdouble, u2: GLdouble, stride: GLint, order: GLint, points: *const GLdouble) as map_1d;
    fn glMap1f(target: GLenum, u1: GLfloat, u2: GLfloat, stride: GLint, order: GLint, points: *const GLfloat) as map_1f;
    fn glMap2d(target: GLenum, u1: GLdouble, u2: GLdouble, ustride: GLint, uorder: GLint, v1: GLdouble, v2: GLdouble, vstride: GLint, vorder: GLint, points: *const GLdouble) as map_2d;
    fn glMap2f(target: GLenum, u1: GLfloat, u2: GLfloat, ustride: GLint, uorder: GLint, v1: GLfloat, v2: GLfloat, vstride: GLint, vorder: GLint, points: *const GLfloat) as map_2f;
    fn glMapGrid1d(un: GLint, u1: GLdouble, u2: GLdouble) as map_grid_1d;
    fn glMapGrid1f(un: GLint, u1: GLfloat, u2: GLfloat) as map_grid_1f;
    fn glMapGrid2d(un: GLint, u1: GLdouble, u2: GLdouble, vn: GLint, v1: GLdouble, v2: GLdouble) as map_grid_2d;
    fn glMapGrid2f(un: GLint, u1: GLfloat, u2: GLfloat, vn: GLint, v1: GLfloat, v2: GLfloat) as map_grid_2f;
    fn glMaterialf(face: GLenum, pname: GLenum, param: GLfloat) as materialf;
    fn glMaterialfv(face: GLenum, pname: GLenum, params: *const GLfloat) as materialfv;
    fn glMateriali(face: GLenum, pname: GLenum, param: GLint) as materiali;
    fn glMaterialiv(face: GLenum, pname: GLenum, params: *const GLint) as materialiv;
    fn glMatrixMode(mode: GLenum) as matrix_mode;
    fn glMultMatrixd(m: *const GLdouble) as mult_matrixd;
    fn glMultMatrixf(m: *const GLfloat) as mult_matrixf;
    fn glNewList(list: GLuint, mode: GLenum) as new_list;
    fn glNormal3b(nx: GLbyte, ny: GLbyte, nz: GLbyte) as normal_3b;
    fn glNormal3bv(v: *const GLbyte) as normal_3bv;
    fn glNormal3d(nx: GLdouble, ny: GLdouble, nz: GLdouble) as normal_3d;
    fn glNormal3dv(v: *const GLdouble) as normal_3dv;
    fn glNormal3f(nx: GLfloat, ny: GLfloat, nz: GLfloat) as normal_3f;
    fn glNormal3fv(v: *const GLfloat) as normal_3fv;
    fn glNormal3i(nx: GLint, ny: GLint, nz: GLint) as normal_3i;
    fn glNormal3iv(v: *const GLint) as normal_3iv;
    fn glNormal3s(nx: GLshort, ny: GLshort, nz: GLshort) as normal_3s;
    fn glNormal3sv(v: *const GLshort) as normal_3sv;
    fn glOrtho(left: GLdouble, right: GLdouble, bottom: GLdouble, top: GLdouble, zNear: GLdouble, zFar: GLdouble) as ortho;
    fn glPassThrough(token: GLfloat) as pass_through;
    fn glPixelMapfv(map: GLenum, mapsize: GLsizei, values: *const GLfloat) as pixel_mapfv;
    fn glPixelMapuiv(map: GLenum, mapsize: GLsizei, values: *const GLuint) as pixel_mapuiv;
    fn glPixelMapusv(map: GLenum, mapsize: GLsizei, values: *const GLushort) as pixel_mapusv;
    fn glPixelStoref(pname: GLenum, param: GLfloat) as pixel_storef;
    fn glPixelStorei(pname: GLenum, param: GLint) as pixel_storei;
    fn glPixelTransferf(pname: GLenum, param: GLfloat) as pixel_transferf;
    fn glPixelTransferi(pname: GLenum, param: GLint) as pixel_transferi;
    fn glPixelZoom(xfactor: GLfloat, yfactor: GLfloat) as pixel_zoom;
    fn glPointSize(size: GLfloat) as point_size;
    fn glPolygonMode(face: GLenum, mode: GLenum) as polygon_mode;
    fn glPolygonStipple(mask: *const GLubyte) as polygon_stipple;
    fn glPopAttrib() as pop_attrib;
    fn glPopMatrix() as pop_matrix;
    fn glPopName() as pop_name;
    fn glPushAttrib(mask: GLbitfield) as push_attrib;
    fn glPushMatrix() as push_matrix;
    fn glPushName(name: GLuint) as push_name;
    fn glRasterPos2d(x: GLdouble, y: GLdouble) as raster_pos_2d;
    fn glRasterPos2dv(v: *const GLdouble) as raster_pos_2dv;
    fn glRasterPos2f(x: GLfloat, y: GLfloat) as raster_pos_2f;
    fn glRasterPos2fv(v: *const GLfloat) as raster_pos_2fv;
    fn glRasterPos2i(x: GLint, y: GLint) as raster_pos_2i;
    fn glRasterPos2iv(v: *const GLint) as raster_pos_2iv;
    fn glRasterPos2s(x: GLshort, y: GLshort) as raster_pos_2s;
    fn glRasterPos2sv(v: *const GLshort) as raster_pos_2sv;
    fn glRasterPos3d(x: GLdouble, y: GLdouble, z: GLdouble) as raster_pos_3d;
    fn glRasterPos3dv(v: *const GLdouble) as raster_pos_3dv;
    fn glRasterPos3f(x: GLfloat, y: GLfloat, z: GLfloat) as raster_pos_3f;
    fn glRasterPos3fv(v: *const GLfloat) as raster_pos_3fv;
    fn glRasterPos3i(x: GLint, y: GLint, z: GLint) as raster_pos_3i;
    fn glRasterPos3iv(v: *const GLint) as raster_pos_3iv;
    fn glRasterPos3s(x: GLshort, y: GLshort, z: GLshort) as raster_pos_3s;
    fn glRasterPos3sv(v: *const GLshort) as raster_pos_3sv;
    fn glRasterPos4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble) as raster_pos_4d;
    fn glRasterPos4dv(v: *const GLdouble) as raster_pos_4dv;
    fn glRasterPos4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) as raster_pos_4f;
    fn glRasterPos4fv(v: *const GLfloat) as raster_pos_4fv;
    fn glRasterPos4i(x: GLint, y: GLint, z: GLint, w: GLint) as raster_pos_4i;
    fn glRasterPos4iv(v: *const GLint) as raster_pos_4iv;
    fn glRasterPos4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort) as raster_pos_4s;
    fn glRasterPos4sv(v: *const GLshort) as raster_pos_4sv;
    fn glReadBuffer(src: GLenum) as read_buffer;
    fn glReadPixels(x: GLint, y: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *mut c_void) as read_pixels;
    fn glRectd(x1: GLdouble, y1: GLdouble, x2: GLdouble, y2: GLdouble) as rectd;
    fn glRectdv(v1: *const GLdouble, v2: *const GLdouble) as rectdv;
    fn glRectf(x1: GLfloat, y1: GLfloat, x2: GLfloat, y2: GLfloat) as rectf;
    fn glRectfv(v1: *const GLfloat, v2: *const GLfloat) as rectfv;
    fn glRecti(x1: GLint, y1: GLint, x2: GLint, y2: GLint) as recti;
    fn glRectiv(v1: *const GLint, v2: *const GLint) as rectiv;
    fn glRects(x1: GLshort, y1: GLshort, x2: GLshort, y2: GLshort) as rects;
    fn glRectsv(v1: *const GLshort, v2: *const GLshort) as rectsv;
    fn glRenderMode(mode: GLenum) -> GLint as render_mode;
    fn glRotated(angle: GLdouble, x: GLdouble, y: GLdouble, z: GLdouble) as rotated;
    fn glRotatef(angle: GLfloat, x: GLfloat, y: GLfloat, z: GLfloat) as rotatef;
    fn glScaled(x: GLdouble, y: GLdouble, z: GLdouble) as scaled;
    fn glScalef(x: GLfloat, y: GLfloat, z: GLfloat) as scalef;
    fn glScissor(x: GLint, y: GLint, width: GLsizei, height: GLsizei) as scissor;
    fn glSelectBuffer(size: GLsizei, buffer: *mut GLuint) as select_buffer;
    fn glShadeModel(mode: GLenum) as shade_model;
    fn glStencilFunc(func: GLenum, ref_: GLint, mask: GLuint) as stencil_func;
    fn glStencilMask(mask: GLuint) as stencil_mask;
    fn glStencilOp(fail: GLenum, zfail: GLenum, zpass: GLenum) as stencil_op;
    fn glTexCoord1d(s: GLdouble) as tex_coord_1d;
    fn glTexCoord1dv(v: *const GLdouble) as tex_coord_1dv;
    fn glTexCoord1f(s: GLfloat) as tex_coord_1f;
    fn glTexCoord1fv(v: *const GLfloat) as tex_coord_1fv;
    fn glTexCoord1i(s: GLint) as tex_coord_1i;
    fn glTexCoord1iv(v: *const GLint) as tex_coord_1iv;
    fn glTexCoord1s(s: GLshort) as tex_coord_1s;
    fn glTexCoord1sv(v: *const GLshort) as tex_coord_1sv;
    fn glTexCoord2d(s: GLdouble, t: GLdouble) as tex_coord_2d;
    fn glTexCoord2dv(v: *const GLdouble) as tex_coord_2dv;
    fn glTexCoord2f(s: GLfloat, t: GLfloat) as tex_coord_2f;
    fn glTexCoord2fv(v: *const GLfloat) as tex_coord_2fv;
    fn glTexCoord2i(s: GLint, t: GLint) as tex_coord_2i;
    fn glTexCoord2iv(v: *const GLint) as tex_coord_2iv;
    fn glTexCoord2s(s: GLshort, t: GLshort) as tex_coord_2s;
    fn glTexCoord2sv(v: *const GLshort) as tex_coord_2sv;
    fn glTexCoord3d(s: GLdouble, t: GLdouble, r: GLdouble) as tex_coord_3d;
    fn glTexCoord3dv(v: *const GLdouble) as tex_coord_3dv;
    fn glTexCoord3f(s: GLfloat, t: GLfloat, r: GLfloat) as tex_coord_3f;
    fn glTexCoord3fv(v: *const GLfloat) as tex_coord_3fv;
    fn glTexCoord3i(s: GLint, t: GLint, r: GLint) as tex_coord_3i;
    fn glTexCoord3iv(v: *const GLint) as tex_coord_3iv;
    fn glTexCoord3s(s: GLshort, t: GLshort, r: GLshort) as tex_coord_3s;
    fn glTexCoord3sv(v: *const GLshort) as tex_coord_3sv;
    fn glTexCoord4d(s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble) as tex_coord_4d;
    fn glTexCoord4dv(v: *const GLdouble) as tex_coord_4dv;
    fn glTexCoord4f(s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat) as tex_coord_4f;
    fn glTexCoord4fv(v: *const GLfloat) as tex_coord_4fv;
    fn glTexCoord4i(s: GLint, t: GLint, r: GLint, q: GLint) as tex_coord_4i;
    fn glTexCoord4iv(v: *const GLint) as tex_coord_4iv;
    fn glTexCoord4s(s: GLshort, t: GLshort, r: GLshort, q: GLshort) as tex_coord_4s;
    fn glTexCoord4sv(v: *const GLshort) as tex_coord_4sv;
    fn glTexEnvf(target: GLenum, pname: GLenum, param: GLfloat) as tex_envf;
    fn glTexEnvfv(target: GLenum, pname: GLenum, params: *const GLfloat) as tex_envfv;
    fn glTexEnvi(target: GLenum, pname: GLenum, param: GLint) as tex_envi;
    fn glTexEnviv(target: GLenum, pname: GLenum, params: *const GLint) as tex_enviv;
    fn glTexGend(coord: GLenum, pname: GLenum, param: GLdouble) as tex_gend;
    fn glTexGendv(coord: GLenum, pname: GLenum, params: *const GLdouble) as tex_gendv;
    fn glTexGenf(coord: GLenum, pname: GLenum, param: GLfloat) as tex_genf;
    fn glTexGenfv(coord: GLenum, pname: GLenum, params: *const GLfloat) as tex_genfv;
    fn glTexGeni(coord: GLenum, pname: GLenum, param: GLint) as tex_geni;
    fn glTexGeniv(coord: GLenum, pname: GLenum, params: *const GLint) as tex_geniv;
    fn glTexImage1D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) as tex_image_1d;
    fn glTexImage2D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) as tex_image_2d;
    fn glTexParameterf(target: GLenum, pname: GLenum, param: GLfloat) as tex_parameterf;
    fn glTexParameterfv(target: GLenum, pname: GLenum, params: *const GLfloat) as tex_parameterfv;
    fn glTexParameteri(target: GLenum, pname: GLenum, param: GLint) as tex_parameteri;
    fn glTexParameteriv(target: GLenum, pname: GLenum, params: *const GLint) as tex_parameteriv;
    fn glTranslated(x: GLdouble, y: GLdouble, z: GLdouble) as translated;
    fn glTranslatef(x: GLfloat, y: GLfloat, z: GLfloat) as translatef;
    fn glVertex2d(x: GLdouble, y: GLdouble) as vertex_2d;
    fn glVertex2dv(v: *const GLdouble) as vertex_2dv;
    fn glVertex2f(x: GLfloat, y: GLfloat) as vertex_2f;
    fn glVertex2fv(v: *const GLfloat) as vertex_2fv;
    fn glVertex2i(x: GLint, y: GLint) as vertex_2i;
    fn glVertex2iv(v: *const GLint) as vertex_2iv;
    fn glVertex2s(x: GLshort, y: GLshort) as vertex_2s;
    fn glVertex2sv(v: *const GLshort) as vertex_2sv;
    fn glVertex3d(x: GLdouble, y: GLdouble, z: GLdouble) as vertex_3d;
    fn glVertex3dv(v: *const GLdouble) as vertex_3dv;
    fn glVertex3f(x: GLfloat, y: GLfloat, z: GLfloat) as vertex_3f;
    fn glVertex3fv(v: *const GLfloat) as vertex_3fv;
    fn glVertex3i(x: GLint, y: GLint, z: GLint) as vertex_3i;
    fn glVertex3iv(v: *const GLint) as vertex_3iv;
    fn glVertex3s(x: GLshort, y: GLshort, z: GLshort) as vertex_3s;
    fn glVertex3sv(v: *const GLshort) as vertex_3sv;
    fn glVertex4d(x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble) as vertex_4d;
    fn glVertex4dv(v: *const GLdouble) as vertex_4dv;
    fn glVertex4f(x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) as vertex_4f;
    fn glVertex4fv(v: *const GLfloat) as vertex_4fv;
    fn glVertex4i(x: GLint, y: GLint, z: GLint, w: GLint) as vertex_4i;
    fn glVertex4iv(v: *const GLint) as vertex_4iv;
    fn glVertex4s(x: GLshort, y: GLshort, z: GLshort, w: GLshort) as vertex_4s;
    fn glVertex4sv(v: *const GLshort) as vertex_4sv;
    fn glViewport(x: GLint, y: GLint, width: GLsizei, height: GLsizei) as viewport;

    // GL 1.1
    fn glAreTexturesResident(n: GLsizei, textures: *const GLuint, residences: *mut GLboolean) -> GLboolean as are_textures_resident;
    fn glArrayElement(i: GLint) as array_element;
    fn glBindTexture(target: GLenum, texture: GLuint) as bind_texture;
    fn glColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) as color_pointer;
    fn glCopyTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, border: GLint) as copy_tex_image_1d;
    fn glCopyTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, x: GLint, y: GLint, width: GLsizei, height: GLsizei, border: GLint) as copy_tex_image_2d;
    fn glCopyTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, x: GLint, y: GLint, width: GLsizei) as copy_tex_sub_image_1d;
    fn glCopyTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei) as copy_tex_sub_image_2d;
    fn glDeleteTextures(n: GLsizei, textures: *const GLuint) as delete_textures;
    fn glDisableClientState(ren_array: GLenum) as disable_client_state;
    fn glDrawArrays(mode: GLenum, first: GLint, count: GLsizei) as draw_arrays;
    fn glDrawElements(mode: GLenum, count: GLsizei, type_: GLenum, indices: *const c_void) as draw_elements;
    fn glEdgeFlagPointer(stride: GLsizei, pointer: *const c_void) as edge_flag_pointer;
    fn glEnableClientState(ren_array: GLenum) as enable_client_state;
    fn glGenTextures(n: GLsizei, textures: *mut GLuint) as gen_textures;
    fn glGetPointerv(pname: GLenum, params: *mut *mut c_void) as get_pointerv;
    fn glIndexPointer(type_: GLenum, stride: GLsizei, pointer: *const c_void) as index_pointer;
    fn glIndexub(c: GLubyte) as indexub;
    fn glIndexubv(c: *const GLubyte) as indexubv;
    fn glInterleavedArrays(format: GLenum, stride: GLsizei, pointer: *const c_void) as interleaved_arrays;
    fn glIsTexture(texture: GLuint) -> GLboolean as is_texture;
    fn glNormalPointer(type_: GLenum, stride: GLsizei, pointer: *const c_void) as normal_pointer;
    fn glPolygonOffset(factor: GLfloat, units: GLfloat) as polygon_offset;
    fn glPopClientAttrib() as pop_client_attrib;
    fn glPrioritizeTextures(n: GLsizei, textures: *const GLuint, priorities: *const GLfloat) as prioritize_textures;
    fn glPushClientAttrib(mask: GLbitfield) as push_client_attrib;
    fn glTexCoordPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) as tex_coord_pointer;
    fn glTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) as tex_sub_image_1d;
    fn glTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) as tex_sub_image_2d;
    fn glVertexPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) as vertex_pointer;

    // GL 1.2
    fn glCopyTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, x: GLint, y: GLint, width: GLsizei, height: GLsizei) as copy_tex_sub_image_3d;
    fn glDrawRangeElements(mode: GLenum, start: GLuint, end: GLuint, count: GLsizei, type_: GLenum, indices: *const c_void) as draw_range_elements;
    fn glTexImage3D(target: GLenum, level: GLint, internalformat: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, format: GLenum, type_: GLenum, pixels: *const c_void) as tex_image_3d;
    fn glTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, type_: GLenum, pixels: *const c_void) as tex_sub_image_3d;

    // GL 1.3
    fn glActiveTexture(texture: GLenum) as active_texture;
    fn glClientActiveTexture(texture: GLenum) as client_active_texture;
    fn glCompressedTexImage1D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void) as compressed_tex_image_1d;
    fn glCompressedTexImage2D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void) as compressed_tex_image_2d;
    fn glCompressedTexImage3D(target: GLenum, level: GLint, internalformat: GLenum, width: GLsizei, height: GLsizei, depth: GLsizei, border: GLint, imageSize: GLsizei, data: *const c_void) as compressed_tex_image_3d;
    fn glCompressedTexSubImage1D(target: GLenum, level: GLint, xoffset: GLint, width: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void) as compressed_tex_sub_image_1d;
    fn glCompressedTexSubImage2D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, width: GLsizei, height: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void) as compressed_tex_sub_image_2d;
    fn glCompressedTexSubImage3D(target: GLenum, level: GLint, xoffset: GLint, yoffset: GLint, zoffset: GLint, width: GLsizei, height: GLsizei, depth: GLsizei, format: GLenum, imageSize: GLsizei, data: *const c_void) as compressed_tex_sub_image_3d;
    fn glGetCompressedTexImage(target: GLenum, level: GLint, img: *mut c_void) as get_compressed_tex_image;
    fn glLoadTransposeMatrixd(m: *const GLdouble) as load_transpose_matrixd;
    fn glLoadTransposeMatrixf(m: *const GLfloat) as load_transpose_matrixf;
    fn glMultTransposeMatrixd(m: *const GLdouble) as mult_transpose_matrixd;
    fn glMultTransposeMatrixf(m: *const GLfloat) as mult_transpose_matrixf;
    fn glMultiTexCoord1d(target: GLenum, s: GLdouble) as multi_tex_coord_1d;
    fn glMultiTexCoord1dv(target: GLenum, v: *const GLdouble) as multi_tex_coord_1dv;
    fn glMultiTexCoord1f(target: GLenum, s: GLfloat) as multi_tex_coord_1f;
    fn glMultiTexCoord1fv(target: GLenum, v: *const GLfloat) as multi_tex_coord_1fv;
    fn glMultiTexCoord1i(target: GLenum, s: GLint) as multi_tex_coord_1i;
    fn glMultiTexCoord1iv(target: GLenum, v: *const GLint) as multi_tex_coord_1iv;
    fn glMultiTexCoord1s(target: GLenum, s: GLshort) as multi_tex_coord_1s;
    fn glMultiTexCoord1sv(target: GLenum, v: *const GLshort) as multi_tex_coord_1sv;
    fn glMultiTexCoord2d(target: GLenum, s: GLdouble, t: GLdouble) as multi_tex_coord_2d;
    fn glMultiTexCoord2dv(target: GLenum, v: *const GLdouble) as multi_tex_coord_2dv;
    fn glMultiTexCoord2f(target: GLenum, s: GLfloat, t: GLfloat) as multi_tex_coord_2f;
    fn glMultiTexCoord2fv(target: GLenum, v: *const GLfloat) as multi_tex_coord_2fv;
    fn glMultiTexCoord2i(target: GLenum, s: GLint, t: GLint) as multi_tex_coord_2i;
    fn glMultiTexCoord2iv(target: GLenum, v: *const GLint) as multi_tex_coord_2iv;
    fn glMultiTexCoord2s(target: GLenum, s: GLshort, t: GLshort) as multi_tex_coord_2s;
    fn glMultiTexCoord2sv(target: GLenum, v: *const GLshort) as multi_tex_coord_2sv;
    fn glMultiTexCoord3d(target: GLenum, s: GLdouble, t: GLdouble, r: GLdouble) as multi_tex_coord_3d;
    fn glMultiTexCoord3dv(target: GLenum, v: *const GLdouble) as multi_tex_coord_3dv;
    fn glMultiTexCoord3f(target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat) as multi_tex_coord_3f;
    fn glMultiTexCoord3fv(target: GLenum, v: *const GLfloat) as multi_tex_coord_3fv;
    fn glMultiTexCoord3i(target: GLenum, s: GLint, t: GLint, r: GLint) as multi_tex_coord_3i;
    fn glMultiTexCoord3iv(target: GLenum, v: *const GLint) as multi_tex_coord_3iv;
    fn glMultiTexCoord3s(target: GLenum, s: GLshort, t: GLshort, r: GLshort) as multi_tex_coord_3s;
    fn glMultiTexCoord3sv(target: GLenum, v: *const GLshort) as multi_tex_coord_3sv;
    fn glMultiTexCoord4d(target: GLenum, s: GLdouble, t: GLdouble, r: GLdouble, q: GLdouble) as multi_tex_coord_4d;
    fn glMultiTexCoord4dv(target: GLenum, v: *const GLdouble) as multi_tex_coord_4dv;
    fn glMultiTexCoord4f(target: GLenum, s: GLfloat, t: GLfloat, r: GLfloat, q: GLfloat) as multi_tex_coord_4f;
    fn glMultiTexCoord4fv(target: GLenum, v: *const GLfloat) as multi_tex_coord_4fv;
    fn glMultiTexCoord4i(target: GLenum, s: GLint, t: GLint, r: GLint, q: GLint) as multi_tex_coord_4i;
    fn glMultiTexCoord4iv(target: GLenum, v: *const GLint) as multi_tex_coord_4iv;
    fn glMultiTexCoord4s(target: GLenum, s: GLshort, t: GLshort, r: GLshort, q: GLshort) as multi_tex_coord_4s;
    fn glMultiTexCoord4sv(target: GLenum, v: *const GLshort) as multi_tex_coord_4sv;
    fn glSampleCoverage(value: GLfloat, invert: GLboolean) as sample_coverage;

    // GL 1.4
    fn glBlendFuncSeparate(sfactorRGB: GLenum, dfactorRGB: GLenum, sfactorAlpha: GLenum, dfactorAlpha: GLenum) as blend_func_separate;
    fn glFogCoordPointer(type_: GLenum, stride: GLsizei, pointer: *const c_void) as fog_coord_pointer;
    fn glFogCoordd(coord: GLdouble) as fog_coordd;
    fn glFogCoorddv(coord: *const GLdouble) as fog_coorddv;
    fn glFogCoordf(coord: GLfloat) as fog_coordf;
    fn glFogCoordfv(coord: *const GLfloat) as fog_coordfv;
    fn glMultiDrawArrays(mode: GLenum, first: *const GLint, count: *const GLsizei, drawcount: GLsizei) as multi_draw_arrays;
    fn glMultiDrawElements(mode: GLenum, count: *const GLsizei, type_: GLenum, indices: *const *const c_void, drawcount: GLsizei) as multi_draw_elements;
    fn glPointParameterf(pname: GLenum, param: GLfloat) as point_parameterf;
    fn glPointParameterfv(pname: GLenum, params: *const GLfloat) as point_parameterfv;
    fn glPointParameteri(pname: GLenum, param: GLint) as point_parameteri;
    fn glPointParameteriv(pname: GLenum, params: *const GLint) as point_parameteriv;
    fn glSecondaryColor3b(red: GLbyte, green: GLbyte, blue: GLbyte) as secondary_color_3b;
    fn glSecondaryColor3bv(v: *const GLbyte) as secondary_color_3bv;
    fn glSecondaryColor3d(red: GLdouble, green: GLdouble, blue: GLdouble) as secondary_color_3d;
    fn glSecondaryColor3dv(v: *const GLdouble) as secondary_color_3dv;
    fn glSecondaryColor3f(red: GLfloat, green: GLfloat, blue: GLfloat) as secondary_color_3f;
    fn glSecondaryColor3fv(v: *const GLfloat) as secondary_color_3fv;
    fn glSecondaryColor3i(red: GLint, green: GLint, blue: GLint) as secondary_color_3i;
    fn glSecondaryColor3iv(v: *const GLint) as secondary_color_3iv;
    fn glSecondaryColor3s(red: GLshort, green: GLshort, blue: GLshort) as secondary_color_3s;
    fn glSecondaryColor3sv(v: *const GLshort) as secondary_color_3sv;
    fn glSecondaryColor3ub(red: GLubyte, green: GLubyte, blue: GLubyte) as secondary_color_3ub;
    fn glSecondaryColor3ubv(v: *const GLubyte) as secondary_color_3ubv;
    fn glSecondaryColor3ui(red: GLuint, green: GLuint, blue: GLuint) as secondary_color_3ui;
    fn glSecondaryColor3uiv(v: *const GLuint) as secondary_color_3uiv;
    fn glSecondaryColor3us(red: GLushort, green: GLushort, blue: GLushort) as secondary_color_3us;
    fn glSecondaryColor3usv(v: *const GLushort) as secondary_color_3usv;
    fn glSecondaryColorPointer(size: GLint, type_: GLenum, stride: GLsizei, pointer: *const c_void) as secondary_color_pointer;
    fn glWindowPos2d(x: GLdouble, y: GLdouble) as window_pos_2d;
    fn glWindowPos2dv(v: *const GLdouble) as window_pos_2dv;
    fn glWindowPos2f(x: GLfloat, y: GLfloat) as window_pos_2f;
    fn glWindowPos2fv(v: *const GLfloat) as window_pos_2fv;
    fn glWindowPos2i(x: GLint, y: GLint) as window_pos_2i;
    fn glWindowPos2iv(v: *const GLint) as window_pos_2iv;
    fn glWindowPos2s(x: GLshort, y: GLshort) as window_pos_2s;
    fn glWindowPos2sv(v: *const GLshort) as window_pos_2sv;
    fn glWindowPos3d(x: GLdouble, y: GLdouble, z: GLdouble) as window_pos_3d;
    fn glWindowPos3dv(v: *const GLdouble) as window_pos_3dv;
    fn glWindowPos3f(x: GLfloat, y: GLfloat, z: GLfloat) as window_pos_3f;
    fn glWindowPos3fv(v: *const GLfloat) as window_pos_3fv;
    fn glWindowPos3i(x: GLint, y: GLint, z: GLint) as window_pos_3i;
    fn glWindowPos3iv(v: *const GLint) as window_pos_3iv;
    fn glWindowPos3s(x: GLshort, y: GLshort, z: GLshort) as window_pos_3s;
    fn glWindowPos3sv(v: *const GLshort) as window_pos_3sv;

    // GL 1.5
    fn glBeginQuery(target: GLenum, id: GLuint) as begin_query;
    fn glBindBuffer(target: GLenum, buffer: GLuint) as bind_buffer;
    fn glBufferData(target: GLenum, size: GLsizeiptr, data: *const c_void, usage: GLenum) as buffer_data;
    fn glBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *const c_void) as buffer_sub_data;
    fn glDeleteBuffers(n: GLsizei, buffers: *const GLuint) as delete_buffers;
    fn glDeleteQueries(n: GLsizei, ids: *const GLuint) as delete_queries;
    fn glEndQuery(target: GLenum) as end_query;
    fn glGenBuffers(n: GLsizei, buffers: *mut GLuint) as gen_buffers;
    fn glGenQueries(n: GLsizei, ids: *mut GLuint) as gen_queries;
    fn glGetBufferParameteriv(target: GLenum, pname: GLenum, params: *mut GLint) as get_buffer_parameteriv;
    fn glGetBufferPointerv(target: GLenum, pname: GLenum, params: *mut *mut c_void) as get_buffer_pointerv;
    fn glGetBufferSubData(target: GLenum, offset: GLintptr, size: GLsizeiptr, data: *mut c_void) as get_buffer_sub_data;
    fn glGetQueryObjectiv(id: GLuint, pname: GLenum, params: *mut GLint) as get_query_objectiv;
    fn glGetQueryObjectuiv(id: GLuint, pname: GLenum, params: *mut GLuint) as get_query_objectuiv;
    fn glGetQueryiv(target: GLenum, pname: GLenum, params: *mut GLint) as get_queryiv;
    fn glIsBuffer(buffer: GLuint) -> GLboolean as is_buffer;
    fn glIsQuery(id: GLuint) -> GLboolean as is_query;
    fn glMapBuffer(target: GLenum, access: GLenum) -> *mut c_void as map_buffer;
    fn glUnmapBuffer(target: GLenum) -> GLboolean as unmap_buffer;

    // GL 2.0
    fn glAttachShader(program: GLuint, shader: GLuint) as attach_shader;
    fn glBindAttribLocation(program: GLuint, index: GLuint, name: *const GLchar) as bind_attrib_location;
    fn glBlendEquationSeparate(modeRGB: GLenum, modeAlpha: GLenum) as blend_equation_separate;
    fn glCompileShader(shader: GLuint) as compile_shader;
    fn glCreateProgram() -> GLuint as create_program;
    fn glCreateShader(type_: GLenum) -> GLuint as create_shader;
    fn glDeleteProgram(program: GLuint) as delete_program;
    fn glDeleteShader(shader: GLuint) as delete_shader;
    fn glDetachShader(program: GLuint, shader: GLuint) as detach_shader;
    fn glDisableVertexAttribArray(index: GLuint) as disable_vertex_attrib_array;
    fn glDrawBuffers(n: GLsizei, bufs: *const GLenum) as draw_buffers;
    fn glEnableVertexAttribArray(index: GLuint) as enable_vertex_attrib_array;
    fn glGetActiveAttrib(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar) as get_active_attrib;
    fn glGetActiveUniform(program: GLuint, index: GLuint, bufSize: GLsizei, length: *mut GLsizei, size: *mut GLint, type_: *mut GLenum, name: *mut GLchar) as get_active_uniform;
    fn glGetAttachedShaders(program: GLuint, maxCount: GLsizei, count: *mut GLsizei, shaders: *mut GLuint) as get_attached_shaders;
    fn glGetAttribLocation(program: GLuint, name: *const GLchar) -> GLint as get_attrib_location;
    fn glGetProgramInfoLog(program: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar) as get_program_info_log;
    fn glGetProgramiv(program: GLuint, pname: GLenum, params: *mut GLint) as get_programiv;
    fn glGetShaderInfoLog(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, infoLog: *mut GLchar) as get_shader_info_log;
    fn glGetShaderSource(shader: GLuint, bufSize: GLsizei, length: *mut GLsizei, source: *mut GLchar) as get_shader_source;
    fn glGetShaderiv(shader: GLuint, pname: GLenum, params: *mut GLint) as get_shaderiv;
    fn glGetUniformLocation(program: GLuint, name: *const GLchar) -> GLint as get_uniform_location;
    fn glGetUniformfv(program: GLuint, location: GLint, params: *mut GLfloat) as get_uniformfv;
    fn glGetUniformiv(program: GLuint, location: GLint, params: *mut GLint) as get_uniformiv;
    fn glGetVertexAttribPointerv(index: GLuint, pname: GLenum, pointer: *mut *mut c_void) as get_vertex_attrib_pointerv;
    fn glGetVertexAttribdv(index: GLuint, pname: GLenum, params: *mut GLdouble) as get_vertex_attribdv;
    fn glGetVertexAttribfv(index: GLuint, pname: GLenum, params: *mut GLfloat) as get_vertex_attribfv;
    fn glGetVertexAttribiv(index: GLuint, pname: GLenum, params: *mut GLint) as get_vertex_attribiv;
    fn glIsProgram(program: GLuint) -> GLboolean as is_program;
    fn glIsShader(shader: GLuint) -> GLboolean as is_shader;
    fn glLinkProgram(program: GLuint) as link_program;
    fn glShaderSource(shader: GLuint, count: GLsizei, string: *const *const GLchar, length: *const GLint) as shader_source;
    fn glStencilFuncSeparate(face: GLenum, func: GLenum, ref_: GLint, mask: GLuint) as stencil_func_separate;
    fn glStencilMaskSeparate(face: GLenum, mask: GLuint) as stencil_mask_separate;
    fn glStencilOpSeparate(face: GLenum, sfail: GLenum, dpfail: GLenum, dppass: GLenum) as stencil_op_separate;
    fn glUniform1f(location: GLint, v0: GLfloat) as uniform_1f;
    fn glUniform1fv(location: GLint, count: GLsizei, value: *const GLfloat) as uniform_1fv;
    fn glUniform1i(location: GLint, v0: GLint) as uniform_1i;
    fn glUniform1iv(location: GLint, count: GLsizei, value: *const GLint) as uniform_1iv;
    fn glUniform2f(location: GLint, v0: GLfloat, v1: GLfloat) as uniform_2f;
    fn glUniform2fv(location: GLint, count: GLsizei, value: *const GLfloat) as uniform_2fv;
    fn glUniform2i(location: GLint, v0: GLint, v1: GLint) as uniform_2i;
    fn glUniform2iv(location: GLint, count: GLsizei, value: *const GLint) as uniform_2iv;
    fn glUniform3f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat) as uniform_3f;
    fn glUniform3fv(location: GLint, count: GLsizei, value: *const GLfloat) as uniform_3fv;
    fn glUniform3i(location: GLint, v0: GLint, v1: GLint, v2: GLint) as uniform_3i;
    fn glUniform3iv(location: GLint, count: GLsizei, value: *const GLint) as uniform_3iv;
    fn glUniform4f(location: GLint, v0: GLfloat, v1: GLfloat, v2: GLfloat, v3: GLfloat) as uniform_4f;
    fn glUniform4fv(location: GLint, count: GLsizei, value: *const GLfloat) as uniform_4fv;
    fn glUniform4i(location: GLint, v0: GLint, v1: GLint, v2: GLint, v3: GLint) as uniform_4i;
    fn glUniform4iv(location: GLint, count: GLsizei, value: *const GLint) as uniform_4iv;
    fn glUniformMatrix2fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) as uniform_matrix_2fv;
    fn glUniformMatrix3fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) as uniform_matrix_3fv;
    fn glUniformMatrix4fv(location: GLint, count: GLsizei, transpose: GLboolean, value: *const GLfloat) as uniform_matrix_4fv;
    fn glUseProgram(program: GLuint) as use_program;
    fn glValidateProgram(program: GLuint) as validate_program;
    fn glVertexAttrib1d(index: GLuint, x: GLdouble) as vertex_attrib_1d;
    fn glVertexAttrib1dv(index: GLuint, v: *const GLdouble) as vertex_attrib_1dv;
    fn glVertexAttrib1f(index: GLuint, x: GLfloat) as vertex_attrib_1f;
    fn glVertexAttrib1fv(index: GLuint, v: *const GLfloat) as vertex_attrib_1fv;
    fn glVertexAttrib1s(index: GLuint, x: GLshort) as vertex_attrib_1s;
    fn glVertexAttrib1sv(index: GLuint, v: *const GLshort) as vertex_attrib_1sv;
    fn glVertexAttrib2d(index: GLuint, x: GLdouble, y: GLdouble) as vertex_attrib_2d;
    fn glVertexAttrib2dv(index: GLuint, v: *const GLdouble) as vertex_attrib_2dv;
    fn glVertexAttrib2f(index: GLuint, x: GLfloat, y: GLfloat) as vertex_attrib_2f;
    fn glVertexAttrib2fv(index: GLuint, v: *const GLfloat) as vertex_attrib_2fv;
    fn glVertexAttrib2s(index: GLuint, x: GLshort, y: GLshort) as vertex_attrib_2s;
    fn glVertexAttrib2sv(index: GLuint, v: *const GLshort) as vertex_attrib_2sv;
    fn glVertexAttrib3d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble) as vertex_attrib_3d;
    fn glVertexAttrib3dv(index: GLuint, v: *const GLdouble) as vertex_attrib_3dv;
    fn glVertexAttrib3f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat) as vertex_attrib_3f;
    fn glVertexAttrib3fv(index: GLuint, v: *const GLfloat) as vertex_attrib_3fv;
    fn glVertexAttrib3s(index: GLuint, x: GLshort, y: GLshort, z: GLshort) as vertex_attrib_3s;
    fn glVertexAttrib3sv(index: GLuint, v: *const GLshort) as vertex_attrib_3sv;
    fn glVertexAttrib4Nbv(index: GLuint, v: *const GLbyte) as vertex_attrib_4_nbv;
    fn glVertexAttrib4Niv(index: GLuint, v: *const GLint) as vertex_attrib_4_niv;
    fn glVertexAttrib4Nsv(index: GLuint, v: *const GLshort) as vertex_attrib_4_nsv;
    fn glVertexAttrib4Nub(index: GLuint, x: GLubyte, y: GLubyte, z: GLubyte, w: GLubyte) as vertex_attrib_4_nub;
    fn glVertexAttrib4Nubv(index: GLuint, v: *const GLubyte) as vertex_attrib_4_nubv;
    fn glVertexAttrib4Nuiv(index: GLuint, v: *const GLuint) as vertex_attrib_4_nuiv;
    fn glVertexAttrib4Nusv(index: GLuint, v: *const GLushort) as vertex_attrib_4_nusv;
    fn glVertexAttrib4bv(index: GLuint, v: *const GLbyte) as vertex_attrib_4bv;
    fn glVertexAttrib4d(index: GLuint, x: GLdouble, y: GLdouble, z: GLdouble, w: GLdouble) as vertex_attrib_4d;
    fn glVertexAttrib4dv(index: GLuint, v: *const GLdouble) as vertex_attrib_4dv;
    fn glVertexAttrib4f(index: GLuint, x: GLfloat, y: GLfloat, z: GLfloat, w: GLfloat) as vertex_attrib_4f;
    fn glVertexAttrib4fv(index: GLuint, v: *const GLfloat) as vertex_attrib_4fv;
    fn glVertexAttrib4iv(index: GLuint, v: *const GLint) as vertex_attrib_4iv;
    fn glVertexAttrib4s(index: GLuint, x: GLshort, y: GLshort, z: GLshort, w: GLshort) as vertex_attrib_4s;
    fn glVertexAttrib4sv(index: GLuint, v: *const GLshort) as vertex_attrib_4sv;
    fn glVertexAttrib4ubv(index: GLuint, v: *const GLubyte) as vertex_attrib_4ubv;
    fn glVertexAttrib4uiv(index: GLuint, v: *const GLuint) as vertex_attrib_4uiv;
    fn glVertexAttrib4usv(index: GLuint, v: *const GLushort) as vertex_attrib_4usv;
    fn glVertexAttribPointer(index: GLuint, size: GLint, type_: GLenum, normalized: GLboolean, stride: GLsizei, pointer: *const c_void) as vertex_attrib_pointer;
}
